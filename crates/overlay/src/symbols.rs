//! Symbol table panel: at most one pre-baked table visible at a time.

use crate::OverlayState;
use doc_model::{Document, NodeId};
use nav_core::SelectionHook;

#[derive(Debug, Default)]
pub struct SymbolTablePanel {
    visible: Option<NodeId>,
}

impl SymbolTablePanel {
    /// The node whose table is currently shown, if any.
    pub fn visible_table(&self) -> Option<&NodeId> {
        self.visible.as_ref()
    }

    pub(crate) fn sync_to(&mut self, doc: &Document, selected: &NodeId) {
        // Hide-all before show-one keeps the zero-or-one invariant even for
        // selections without a table or outside the document.
        self.visible = None;
        if doc.get(selected).is_some_and(|a| !a.symbols.is_empty()) {
            self.visible = Some(selected.clone());
        }
    }

    pub(crate) fn close(&mut self) {
        self.visible = None;
    }
}

pub(crate) struct SymbolTableHook;

impl SelectionHook<OverlayState> for SymbolTableHook {
    fn on_select(&mut self, doc: &Document, state: &mut OverlayState, selected: &NodeId) {
        state.symbols.sync_to(doc, selected);
    }
}
