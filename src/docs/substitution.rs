//! Domain value types documented as JSON primitives.

use crate::models::payment::{PaymentMethodId, PaymentType};
use std::{any::TypeId, collections::HashMap};
use utoipa::openapi::{ObjectBuilder, RefOr, Schema, SchemaType};

/// JSON primitive a domain type is documented as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// `"type": "string"`
    String,
    /// `"type": "integer"`
    Integer,
    /// `"type": "number"`
    Number,
    /// `"type": "boolean"`
    Boolean,
}

impl PrimitiveKind {
    /// The schema replacing the structural one.
    pub fn schema(self) -> RefOr<Schema> {
        let schema_type = match self {
            PrimitiveKind::String => SchemaType::String,
            PrimitiveKind::Integer => SchemaType::Integer,
            PrimitiveKind::Number => SchemaType::Number,
            PrimitiveKind::Boolean => SchemaType::Boolean,
        };

        RefOr::T(Schema::Object(
            ObjectBuilder::new().schema_type(schema_type).build(),
        ))
    }
}

/// Immutable table of exact-type substitutions.
///
/// Lookups match on [TypeId] only; wrappers or types containing a registered
/// type are not substituted.
#[derive(Clone, Debug, Default)]
pub struct TypeSubstitutions {
    rules: HashMap<TypeId, PrimitiveKind>,
}

impl TypeSubstitutions {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The Greenfield table: payment types and payment method ids are strings.
    pub fn greenfield() -> Self {
        Self::new()
            .with::<PaymentType>(PrimitiveKind::String)
            .with::<PaymentMethodId>(PrimitiveKind::String)
    }

    /// Register `T` as documented by `kind`.
    pub fn with<T: 'static>(mut self, kind: PrimitiveKind) -> Self {
        self.rules.insert(TypeId::of::<T>(), kind);
        self
    }

    /// Substitution registered for `T`, if any.
    pub fn substitution_for<T: 'static>(&self) -> Option<PrimitiveKind> {
        self.substitution_for_id(TypeId::of::<T>())
    }

    /// Substitution registered for the type with identity `type_id`, if any.
    pub fn substitution_for_id(&self, type_id: TypeId) -> Option<PrimitiveKind> {
        self.rules.get(&type_id).copied()
    }
}
