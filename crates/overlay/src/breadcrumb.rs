//! Breadcrumb panel: the ancestor trail of the selected node.

use crate::OverlayState;
use doc_model::{Document, NodeId};
use nav_core::SelectionHook;

/// One row of the trail. Rows carry their own identity so a row click can
/// route back through the dispatcher ("jump to ancestor").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbRow {
    pub id: NodeId,
    pub kind: String,
    pub line: u32,
    pub column: u32,
}

/// Panel state. Becomes visible on the first notification and stays visible
/// across selections until explicitly closed.
#[derive(Debug, Default)]
pub struct BreadcrumbPanel {
    visible: bool,
    rows: Vec<BreadcrumbRow>,
}

impl BreadcrumbPanel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rows nearest-first: selected node, then each ancestor up to the root.
    pub fn rows(&self) -> &[BreadcrumbRow] {
        &self.rows
    }

    pub(crate) fn show_chain(&mut self, doc: &Document, selected: &NodeId) {
        self.rows = doc
            .ancestor_chain(selected)
            .into_iter()
            .filter_map(|id| {
                doc.get(&id).map(|a| BreadcrumbRow {
                    id: id.clone(),
                    kind: a.kind.clone(),
                    line: a.line,
                    column: a.column,
                })
            })
            .collect();
        self.visible = true;
    }

    // Hides only; rows stay until the next selection, as in the rendered
    // panel where closing does not empty the list element.
    pub(crate) fn close(&mut self) {
        self.visible = false;
    }
}

pub(crate) struct BreadcrumbHook;

impl SelectionHook<OverlayState> for BreadcrumbHook {
    fn on_select(&mut self, doc: &Document, state: &mut OverlayState, selected: &NodeId) {
        state.breadcrumb.show_chain(doc, selected);
    }
}
