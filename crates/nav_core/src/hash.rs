//! Single-slot selection state, the source of truth for "which node is
//! currently selected", encoded as the URL fragment.

use crate::fragment;
use doc_model::NodeId;

/// Owns the selection slot. Every write through [`HashRouter::set_selected`]
/// yields a [`FragmentChange`] that the dispatcher must deliver, including
/// when the new value equals the previous one, so re-selecting the current
/// node still re-fires the full render pipeline.
#[derive(Debug, Default)]
pub struct HashRouter {
    selected: Option<NodeId>,
}

/// Proof of a fragment write. `#[must_use]`: dropping one silently would
/// break the "exactly one notification per write" contract.
#[must_use]
#[derive(Debug)]
pub struct FragmentChange {
    selected: NodeId,
}

impl FragmentChange {
    pub fn selected(&self) -> &NodeId {
        &self.selected
    }
}

impl HashRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `id` as the current fragment.
    pub fn set_selected(&mut self, id: NodeId) -> FragmentChange {
        log::trace!(target: "treescope.nav", "fragment <- #{id}");
        self.selected = Some(id.clone());
        FragmentChange { selected: id }
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    /// Current fragment in shareable form (`#id`), if any.
    pub fn fragment(&self) -> Option<String> {
        self.selected.as_ref().map(fragment::format_fragment)
    }

    /// Record a fragment the browser already wrote (back/forward, pasted
    /// link). No change token: the platform notification already happened.
    pub(crate) fn sync(&mut self, id: NodeId) {
        self.selected = Some(id);
    }

    /// Return to the no-selection state (empty or malformed fragment).
    pub(crate) fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_read_round_trips() {
        let mut router = HashRouter::new();
        let change = router.set_selected(NodeId::from("node_7"));
        assert_eq!(change.selected(), &NodeId::from("node_7"));
        assert_eq!(router.selected(), Some(&NodeId::from("node_7")));
        assert_eq!(router.fragment().as_deref(), Some("#node_7"));
    }

    #[test]
    fn rewriting_the_same_value_still_yields_a_change() {
        let mut router = HashRouter::new();
        let _ = router.set_selected(NodeId::from("node_7"));
        let change = router.set_selected(NodeId::from("node_7"));
        assert_eq!(change.selected(), &NodeId::from("node_7"));
    }

    #[test]
    fn starts_with_no_selection() {
        let router = HashRouter::new();
        assert_eq!(router.selected(), None);
        assert_eq!(router.fragment(), None);
    }
}
