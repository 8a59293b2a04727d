//! Security scopes derived from authorization requirements.

use crate::metadata::HandlerMetadata;

/// Policies gating `handler` under the authentication scheme `scheme`.
///
/// The declaring type's requirements come first, then the handler's.
/// Requirements are kept when both their policy and their scheme are set and
/// the scheme equals `scheme` ignoring ASCII case. Declaration order and
/// duplicates are preserved. An empty list means the operation has no policy
/// gating under `scheme`, whether or not it is authenticated through it.
pub fn scopes_for(handler: &HandlerMetadata, scheme: &str) -> Vec<String> {
    handler
        .authorization_requirements()
        .filter_map(|requirement| {
            match (&requirement.policy, &requirement.authentication_schemes) {
                (Some(policy), Some(schemes)) if schemes.eq_ignore_ascii_case(scheme) => {
                    Some(policy.clone())
                }
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{AuthorizationRequirement, DeclaringType};

    #[test]
    fn test_keeps_matching_scheme_in_order() {
        let handler = HandlerMetadata::new("mixed")
            .authorize(AuthorizationRequirement::new("A", "APIKey"))
            .authorize(AuthorizationRequirement::new("B", "Other"))
            .authorize(AuthorizationRequirement::new("C", "APIKey"));

        assert_eq!(scopes_for(&handler, "APIKey"), vec!["A", "C"]);
    }

    #[test]
    fn test_scheme_comparison_ignores_case() {
        let handler =
            HandlerMetadata::new("lower").authorize(AuthorizationRequirement::new("A", "apikey"));

        assert_eq!(scopes_for(&handler, "APIKey"), vec!["A"]);
    }

    #[test]
    fn test_no_requirements_yields_empty() {
        assert!(scopes_for(&HandlerMetadata::new("health"), "APIKey").is_empty());
    }

    #[test]
    fn test_incomplete_requirements_dropped() {
        let handler = HandlerMetadata::new("partial")
            .authorize(AuthorizationRequirement::scheme_only("APIKey"))
            .authorize(AuthorizationRequirement {
                policy: Some("orphan".to_string()),
                authentication_schemes: None,
            });

        assert!(scopes_for(&handler, "APIKey").is_empty());
    }

    #[test]
    fn test_duplicates_preserved() {
        let handler = HandlerMetadata::new("twice")
            .authorize(AuthorizationRequirement::new("A", "APIKey"))
            .authorize(AuthorizationRequirement::new("A", "APIKey"));

        assert_eq!(scopes_for(&handler, "APIKey"), vec!["A", "A"]);
    }

    #[test]
    fn test_inherits_declaring_type_requirements() {
        let controller = DeclaringType::new("StoresController")
            .authorize(AuthorizationRequirement::new("store.view", "APIKey"));
        let handler = HandlerMetadata::new("get_store").declared_by(&controller);

        assert_eq!(scopes_for(&handler, "APIKey"), vec!["store.view"]);
    }

    #[test]
    fn test_combines_declaring_type_and_handler_requirements() {
        let controller = DeclaringType::new("StoresController")
            .authorize(AuthorizationRequirement::new("A", "APIKey"))
            .authorize(AuthorizationRequirement::new("A", "Cookie"));
        let handler = HandlerMetadata::new("update_store")
            .declared_by(&controller)
            .authorize(AuthorizationRequirement::new("B", "APIKey"));

        assert_eq!(scopes_for(&handler, "APIKey"), vec!["A", "B"]);
    }
}
