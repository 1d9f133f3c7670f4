//! The two visual highlight kinds tracked by the navigation core.
//!
//! Hover is transient and mouse-driven; declaration is persistent and
//! selection-driven. They are disjoint: neither kind's trigger ever clears
//! the other.

use doc_model::NodeId;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HighlightSet {
    hover: Option<NodeId>,
    declaration: Option<NodeId>,
}

impl HighlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mouse entered a reference-bearing element: mark its target.
    pub fn hover_enter(&mut self, target: NodeId) {
        self.hover = Some(target);
    }

    /// Mouse left: the hover mark goes away, nothing else does.
    pub fn hover_clear(&mut self) {
        self.hover = None;
    }

    /// Replace the declaration mark for a new selection.
    pub fn declare(&mut self, target: NodeId) {
        self.declaration = Some(target);
    }

    pub fn declaration_clear(&mut self) {
        self.declaration = None;
    }

    pub fn hover(&self) -> Option<&NodeId> {
        self.hover.as_ref()
    }

    pub fn declaration(&self) -> Option<&NodeId> {
        self.declaration.as_ref()
    }

    /// Whether `id` carries any visual mark (the rendered highlight class).
    pub fn is_marked(&self, id: &NodeId) -> bool {
        self.hover.as_ref() == Some(id) || self.declaration.as_ref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_clear_leaves_declaration_in_place() {
        let mut h = HighlightSet::new();
        h.declare(NodeId::from("decl"));
        h.hover_enter(NodeId::from("hov"));

        h.hover_clear();
        assert_eq!(h.hover(), None);
        assert_eq!(h.declaration(), Some(&NodeId::from("decl")));
    }

    #[test]
    fn declaration_replacement_leaves_hover_in_place() {
        let mut h = HighlightSet::new();
        h.hover_enter(NodeId::from("hov"));
        h.declare(NodeId::from("a"));
        h.declaration_clear();
        h.declare(NodeId::from("b"));

        assert_eq!(h.hover(), Some(&NodeId::from("hov")));
        assert_eq!(h.declaration(), Some(&NodeId::from("b")));
    }

    #[test]
    fn is_marked_covers_both_kinds() {
        let mut h = HighlightSet::new();
        h.hover_enter(NodeId::from("hov"));
        h.declare(NodeId::from("decl"));

        assert!(h.is_marked(&NodeId::from("hov")));
        assert!(h.is_marked(&NodeId::from("decl")));
        assert!(!h.is_marked(&NodeId::from("other")));
    }
}
