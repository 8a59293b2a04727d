//! Handler metadata as seen by the documentation pipeline.
//!
//! Every route the service exposes is described by a [DiscoveredOperation]:
//! the `#[utoipa::path]` output for the route, the schemas it references and
//! a [HandlerMetadata] record holding the handler's own annotations plus the
//! annotations of the type (controller) that declares it. Authorization
//! requirements of both levels apply together.

use std::any::TypeId;
use utoipa::{
    openapi::{PathItem, RefOr, Schema},
    Path, ToSchema,
};

/// One `requires-authorization` declaration on a handler or its declaring type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationRequirement {
    /// Name of the authorization policy, if any.
    pub policy: Option<String>,
    /// Authentication scheme(s) the requirement applies to, if any.
    pub authentication_schemes: Option<String>,
}

impl AuthorizationRequirement {
    /// A requirement with both a policy and an authentication scheme.
    pub fn new(policy: impl Into<String>, authentication_schemes: impl Into<String>) -> Self {
        Self {
            policy: Some(policy.into()),
            authentication_schemes: Some(authentication_schemes.into()),
        }
    }

    /// A requirement that only names the authentication scheme.
    pub fn scheme_only(authentication_schemes: impl Into<String>) -> Self {
        Self {
            policy: None,
            authentication_schemes: Some(authentication_schemes.into()),
        }
    }
}

/// Declarative annotations, attached either to a handler or to its declaring type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Annotations {
    /// The "include in public documentation" marker.
    pub include_in_docs: bool,
    /// Authorization requirements, in declaration order.
    pub authorize: Vec<AuthorizationRequirement>,
}

/// The type (controller) a handler is declared on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclaringType {
    /// Type name, for diagnostics.
    pub name: &'static str,
    /// Type-level annotations.
    pub annotations: Annotations,
}

impl DeclaringType {
    /// New declaring type without annotations.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            annotations: Annotations::default(),
        }
    }

    /// Mark every handler of this type for public documentation.
    pub fn include_in_docs(mut self) -> Self {
        self.annotations.include_in_docs = true;
        self
    }

    /// Add a type-level authorization requirement.
    pub fn authorize(mut self, requirement: AuthorizationRequirement) -> Self {
        self.annotations.authorize.push(requirement);
        self
    }
}

/// Annotations of a single handler and of its declaring type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerMetadata {
    /// Handler name, for diagnostics.
    pub name: &'static str,
    /// Handler-level annotations.
    pub annotations: Annotations,
    /// The declaring type, if the handler has one.
    pub declaring_type: Option<DeclaringType>,
}

impl HandlerMetadata {
    /// New handler metadata without annotations.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            annotations: Annotations::default(),
            declaring_type: None,
        }
    }

    /// Set the declaring type.
    pub fn declared_by(mut self, declaring_type: &DeclaringType) -> Self {
        self.declaring_type = Some(declaring_type.clone());
        self
    }

    /// Mark the handler for public documentation.
    pub fn include_in_docs(mut self) -> Self {
        self.annotations.include_in_docs = true;
        self
    }

    /// Add a handler-level authorization requirement.
    pub fn authorize(mut self, requirement: AuthorizationRequirement) -> Self {
        self.annotations.authorize.push(requirement);
        self
    }

    /// Whether the handler itself carries the documentation marker.
    pub fn is_marked_for_docs(&self) -> bool {
        self.annotations.include_in_docs
    }

    /// Whether the declaring type carries the documentation marker.
    pub fn declaring_type_marked_for_docs(&self) -> bool {
        self.declaring_type
            .as_ref()
            .map(|ty| ty.annotations.include_in_docs)
            .unwrap_or_default()
    }

    /// The authorization requirements in effect for the handler: the
    /// declaring type's, followed by the handler's own.
    pub fn authorization_requirements(&self) -> impl Iterator<Item = &AuthorizationRequirement> {
        self.declaring_type
            .iter()
            .flat_map(|ty| ty.annotations.authorize.iter())
            .chain(self.annotations.authorize.iter())
    }
}

/// A schema referenced by an operation, tagged with the identity of the Rust
/// type it was derived from.
#[derive(Clone, Debug)]
pub struct SchemaSource {
    /// Identity of the Rust type.
    pub type_id: TypeId,
    /// Component name the schema is registered under.
    pub name: String,
    /// The structural schema synthesized for the type.
    pub schema: RefOr<Schema>,
}

impl SchemaSource {
    /// Capture the schema of `T`.
    pub fn of<T: ToSchema<'static> + 'static>() -> Self {
        let (name, schema) = T::schema();

        Self {
            type_id: TypeId::of::<T>(),
            name: name.to_string(),
            schema,
        }
    }
}

/// A route as discovered on the running service.
#[derive(Clone, Debug)]
pub struct DiscoveredOperation {
    /// OpenAPI path template.
    pub path: String,
    /// Path item holding the operation body.
    pub path_item: PathItem,
    /// Handler metadata, `None` when it could not be resolved.
    pub metadata: Option<HandlerMetadata>,
    /// Schemas the operation references.
    pub schemas: Vec<SchemaSource>,
}

impl DiscoveredOperation {
    /// Describe a route from its `#[utoipa::path]` declaration.
    pub fn from_path<P: Path>(metadata: Option<HandlerMetadata>) -> Self {
        Self {
            path: P::path().to_string(),
            path_item: P::path_item(None),
            metadata,
            schemas: Vec::new(),
        }
    }

    /// Record a schema referenced by the operation.
    pub fn with_schema<T: ToSchema<'static> + 'static>(mut self) -> Self {
        self.schemas.push(SchemaSource::of::<T>());
        self
    }
}

/// Source of the service's route table.
pub trait OperationCatalog {
    /// All discovered operations, in route-table order.
    fn operations(&self) -> Vec<DiscoveredOperation>;
}
