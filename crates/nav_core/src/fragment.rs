//! URL-fragment codec.
//!
//! The fragment is the sole persisted/shareable selection state: `#node_17`.
//! Anything that is not a plausible element identity maps to "no selection"
//! rather than an error.

use doc_model::NodeId;

/// Parse a raw fragment (with or without its leading `#`) into a node
/// identity. Empty or malformed fragments yield `None`.
pub fn parse_fragment(raw: &str) -> Option<NodeId> {
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    if raw.is_empty() || !is_identity(raw) {
        return None;
    }
    Some(NodeId::from(raw))
}

/// Format a node identity as a fragment, leading `#` included.
pub fn format_fragment(id: &NodeId) -> String {
    format!("#{id}")
}

// Identities are the id attributes the renderer writes: ASCII, no spaces,
// no URL metacharacters.
fn is_identity(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_fragment_with_and_without_hash() {
        assert_eq!(parse_fragment("#node_1"), Some(NodeId::from("node_1")));
        assert_eq!(parse_fragment("node_1"), Some(NodeId::from("node_1")));
    }

    #[test]
    fn empty_fragment_is_no_selection() {
        assert_eq!(parse_fragment(""), None);
        assert_eq!(parse_fragment("#"), None);
    }

    #[test]
    fn malformed_fragment_is_no_selection() {
        assert_eq!(parse_fragment("#two words"), None);
        assert_eq!(parse_fragment("#a/b"), None);
        assert_eq!(parse_fragment("#x?y=1"), None);
    }

    #[test]
    fn round_trips_through_format() {
        let id = NodeId::from("node_42");
        assert_eq!(format_fragment(&id), "#node_42");
        assert_eq!(parse_fragment(&format_fragment(&id)), Some(id));
    }
}
