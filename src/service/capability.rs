use serde::Serialize;

/// A normalized `(controller, action)` pair derived from a menu item's
/// URL. Never persisted; recomputed on every projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capability {
    pub controller: String,
    pub action: String,
}

/// Derive the capability key from a free-form navigation URL.
///
/// Total over all inputs:
/// - empty URL (or one made only of slashes) → `("", "")`
/// - one segment → `(segment, "Index")` (default-action convention)
/// - two or more segments → `(first, second)`, the rest ignored
///
/// Empty segments are discarded, so leading/trailing/duplicate slashes
/// are tolerated.
pub fn parse_capability(url: &str) -> Capability {
    let mut segments = url.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some(controller), Some(action)) => Capability {
            controller: controller.to_string(),
            action: action.to_string(),
        },
        (Some(controller), None) => Capability {
            controller: controller.to_string(),
            action: "Index".to_string(),
        },
        (None, _) => Capability {
            controller: String::new(),
            action: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(controller: &str, action: &str) -> Capability {
        Capability {
            controller: controller.to_string(),
            action: action.to_string(),
        }
    }

    #[test]
    fn test_empty_url() {
        assert_eq!(parse_capability(""), cap("", ""));
    }

    #[test]
    fn test_slashes_only() {
        assert_eq!(parse_capability("///"), cap("", ""));
    }

    #[test]
    fn test_single_segment_defaults_to_index() {
        assert_eq!(parse_capability("UserMgmt"), cap("UserMgmt", "Index"));
    }

    #[test]
    fn test_controller_and_action() {
        assert_eq!(parse_capability("UserMgmt/Edit"), cap("UserMgmt", "Edit"));
    }

    #[test]
    fn test_extra_segments_ignored() {
        assert_eq!(
            parse_capability("UserMgmt/Edit/Extra/Segments"),
            cap("UserMgmt", "Edit")
        );
    }

    #[test]
    fn test_redundant_slashes_tolerated() {
        assert_eq!(parse_capability("/News//List/"), cap("News", "List"));
        assert_eq!(parse_capability("/Dashboard"), cap("Dashboard", "Index"));
    }
}
