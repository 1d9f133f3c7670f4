//! Declaration highlighting for the selected node's reference target.

use crate::OverlayState;
use doc_model::{Document, NodeId};
use nav_core::SelectionHook;

pub(crate) struct ReferenceHighlightHook;

impl SelectionHook<OverlayState> for ReferenceHighlightHook {
    fn on_select(&mut self, doc: &Document, state: &mut OverlayState, selected: &NodeId) {
        state.highlights.declaration_clear();
        let Some(target) = doc.get(selected).and_then(|a| a.referenced.clone()) else {
            return;
        };
        if doc.contains(&target) {
            state.highlights.declare(target);
        } else {
            // Cross-document references select nothing; see DESIGN.md.
            log::warn!(target: "treescope.nav", "reference target {target} is not in the document");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::fixtures;

    fn run(doc: &Document, state: &mut OverlayState, id: &str) {
        ReferenceHighlightHook.on_select(doc, state, &NodeId::from(id));
    }

    #[test]
    fn marks_the_referenced_declaration() {
        let doc = fixtures::class_with_members();
        let mut state = OverlayState::default();

        run(&doc, &mut state, "node_2");
        assert_eq!(state.highlights.declaration(), Some(&NodeId::from("node_1")));
    }

    #[test]
    fn selection_without_reference_clears_the_previous_mark() {
        let doc = fixtures::class_with_members();
        let mut state = OverlayState::default();

        run(&doc, &mut state, "node_2");
        run(&doc, &mut state, "root");
        assert_eq!(state.highlights.declaration(), None);
    }

    #[test]
    fn dangling_reference_applies_no_mark() {
        let doc = fixtures::dangling_reference();
        let mut state = OverlayState::default();

        run(&doc, &mut state, "node_1");
        assert_eq!(state.highlights.declaration(), None);
    }

    #[test]
    fn hover_mark_survives_selection_changes() {
        let doc = fixtures::class_with_members();
        let mut state = OverlayState::default();
        state.highlights.hover_enter(NodeId::from("node_3"));

        run(&doc, &mut state, "node_2");
        run(&doc, &mut state, "root");
        assert_eq!(state.highlights.hover(), Some(&NodeId::from("node_3")));
    }
}
