//! Assembly of the public OpenAPI document.

use crate::{
    docs::{
        filter,
        scopes::scopes_for,
        security::{ApiKeyAddon, API_KEY_SCHEME},
        substitution::TypeSubstitutions,
    },
    metadata::{DiscoveredOperation, OperationCatalog},
    policies::AuthenticationSchemes,
};
use std::collections::btree_map::Entry;
use tracing::debug;
use utoipa::{
    openapi::{
        security::SecurityRequirement, Components, ContactBuilder, Info, InfoBuilder, OpenApi,
        OpenApiBuilder, Paths,
    },
    Modify,
};

const TITLE: &str = "BTCPay Greenfield API";
const VERSION: &str = "v1";
const DESCRIPTION: &str = "A full API to use your BTCPay Server";
const CONTACT_NAME: &str = "BTCPay Server";
const CONTACT_URL: &str = "https://btcpayserver.org";

/// Builds the public document from the discovered route table.
///
/// The assembler holds no mutable state: the same input always produces the
/// same document, and it may be shared between threads.
#[derive(Clone, Debug)]
pub struct DocumentAssembler {
    security_scheme: String,
    authentication_scheme: String,
    substitutions: TypeSubstitutions,
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new(
            API_KEY_SCHEME,
            AuthenticationSchemes::GREENFIELD_API_KEY,
            TypeSubstitutions::greenfield(),
        )
    }
}

impl DocumentAssembler {
    /// New assembler.
    ///
    /// `security_scheme` is the name the API-key scheme is registered under;
    /// `authentication_scheme` is the scheme whose policies become scopes.
    pub fn new(
        security_scheme: impl Into<String>,
        authentication_scheme: impl Into<String>,
        substitutions: TypeSubstitutions,
    ) -> Self {
        Self {
            security_scheme: security_scheme.into(),
            authentication_scheme: authentication_scheme.into(),
            substitutions,
        }
    }

    /// Assemble the document for every operation of `catalog`.
    pub fn assemble_catalog(&self, catalog: &impl OperationCatalog) -> OpenApi {
        self.assemble(catalog.operations())
    }

    /// Assemble the document for `operations`.
    pub fn assemble(&self, operations: impl IntoIterator<Item = DiscoveredOperation>) -> OpenApi {
        let mut paths = Paths::new();
        let mut components = Components::new();

        for operation in operations {
            let DiscoveredOperation {
                path,
                mut path_item,
                metadata,
                schemas,
            } = operation;

            let Some(handler) = metadata.filter(|handler| filter::include(Some(handler))) else {
                debug!(subject = "openapi", category = "assemble", %path, "operation excluded");
                continue;
            };

            let scopes = scopes_for(&handler, &self.authentication_scheme);
            debug!(
                subject = "openapi",
                category = "assemble",
                handler = handler.name,
                %path,
                ?scopes,
                "operation included"
            );

            for body in path_item.operations.values_mut() {
                body.security = Some(vec![SecurityRequirement::new(
                    self.security_scheme.as_str(),
                    scopes.iter().map(String::as_str),
                )]);
            }

            match paths.paths.entry(path) {
                Entry::Occupied(mut entry) => {
                    entry.get_mut().operations.append(&mut path_item.operations)
                }
                Entry::Vacant(entry) => {
                    entry.insert(path_item);
                }
            }

            for source in schemas {
                let schema = match self.substitutions.substitution_for_id(source.type_id) {
                    Some(kind) => kind.schema(),
                    None => source.schema,
                };
                components.schemas.insert(source.name, schema);
            }
        }

        let mut document = OpenApiBuilder::new()
            .info(info())
            .paths(paths)
            .components(Some(components))
            .build();

        ApiKeyAddon::new(&self.security_scheme).modify(&mut document);

        document
    }
}

fn info() -> Info {
    InfoBuilder::new()
        .title(TITLE)
        .version(VERSION)
        .description(Some(DESCRIPTION))
        .contact(Some(
            ContactBuilder::new()
                .name(Some(CONTACT_NAME))
                .url(Some(CONTACT_URL))
                .email(Some(""))
                .build(),
        ))
        .build()
}
