//! Which operations make it into the public document.

use crate::metadata::HandlerMetadata;

/// Decide whether an operation belongs in the generated document.
///
/// The handler's own marker is checked first, then its declaring type's.
/// Operations whose metadata could not be resolved are left out.
pub fn include(metadata: Option<&HandlerMetadata>) -> bool {
    match metadata {
        Some(handler) => handler.is_marked_for_docs() || handler.declaring_type_marked_for_docs(),
        None => false,
    }
}
