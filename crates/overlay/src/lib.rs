//! # overlay
//!
//! The viewer overlay: one [`Overlay`] per rendered document, owning the
//! read-only annotation model, the panel/highlight state, and the selection
//! dispatcher. Panels subscribe to selection changes through the hook
//! registry in a fixed order (breadcrumb, symbol table, reference
//! highlighter), so every dispatch leaves all three consistent with the
//! URL fragment.
//!
//! Everything here is synchronous and single-threaded: a gesture method
//! returns only after the full dispatch round has completed.

mod breadcrumb;
mod highlighter;
mod symbols;

pub use crate::breadcrumb::{BreadcrumbPanel, BreadcrumbRow};
pub use crate::symbols::SymbolTablePanel;

use crate::breadcrumb::BreadcrumbHook;
use crate::highlighter::ReferenceHighlightHook;
use crate::symbols::SymbolTableHook;
use doc_model::{Document, NodeId, SymbolRow};
use nav_core::{HighlightSet, SelectionDispatcher};
use url::Url;

/// Presentation-side state the subscribers mutate: highlight marks and panel
/// visibility. These are the only mutations the navigation core performs;
/// the document itself stays read-only.
#[derive(Debug, Default)]
pub struct OverlayState {
    pub highlights: HighlightSet,
    pub breadcrumb: BreadcrumbPanel,
    pub symbols: SymbolTablePanel,
}

pub struct Overlay {
    doc: Document,
    state: OverlayState,
    dispatcher: SelectionDispatcher<OverlayState>,
}

impl Overlay {
    /// Wire the panels over `doc`, starting Idle (no fragment at load).
    pub fn new(doc: Document) -> Self {
        let mut dispatcher = SelectionDispatcher::new();
        dispatcher.register(Box::new(BreadcrumbHook));
        dispatcher.register(Box::new(SymbolTableHook));
        dispatcher.register(Box::new(ReferenceHighlightHook));
        Self {
            doc,
            state: OverlayState::default(),
            dispatcher,
        }
    }

    /// Wire the panels and perform the startup dispatch for a fragment that
    /// was present in the URL at load, so a shared link reproduces the exact
    /// selection and all panel contents.
    pub fn with_fragment(doc: Document, raw_fragment: Option<&str>) -> Self {
        let mut overlay = Self::new(doc);
        overlay
            .dispatcher
            .startup(&overlay.doc, &mut overlay.state, raw_fragment);
        overlay
    }

    /// [`Overlay::with_fragment`] from a full document URL.
    pub fn open_url(doc: Document, url: &Url) -> Self {
        Self::with_fragment(doc, url.fragment())
    }

    // --- Gesture surface ---

    /// Direct click on the node element carrying `id`.
    pub fn click_node(&mut self, id: &NodeId) {
        self.dispatcher
            .click_node(&self.doc, &mut self.state, id.clone());
    }

    /// Click on a breadcrumb row or reference entry carrying `target`.
    pub fn click_reference(&mut self, target: &NodeId) {
        self.dispatcher
            .click_reference(&self.doc, &mut self.state, target.clone());
    }

    /// The browser reported a fragment change (back/forward, pasted link).
    pub fn fragment_changed(&mut self, raw: &str) {
        self.dispatcher
            .fragment_changed(&self.doc, &mut self.state, raw);
    }

    /// Mouse entered a reference-bearing element; mark its target.
    pub fn hover_reference_enter(&mut self, target: &NodeId) {
        if self.doc.contains(target) {
            self.state.highlights.hover_enter(target.clone());
        } else {
            log::warn!(target: "treescope.nav", "hover target {target} is not in the document");
        }
    }

    /// Mouse left the reference-bearing element.
    pub fn hover_reference_leave(&mut self) {
        self.state.highlights.hover_clear();
    }

    /// Toolbar action: clear the hover mark without touching the
    /// declaration mark.
    pub fn clear_hover_highlight(&mut self) {
        self.state.highlights.hover_clear();
    }

    /// Toolbar action: one extra dispatch round for the current selection.
    /// Returns whether a round ran (false when nothing is selected).
    pub fn reselect(&mut self) -> bool {
        self.dispatcher.reselect(&self.doc, &mut self.state)
    }

    /// Toolbar action: step to the identity with the next numeric suffix
    /// (`node_3` -> `node_4`). The fragment moves even when the target is
    /// not in the document; panels then end empty. Returns whether a step
    /// was taken.
    pub fn select_next(&mut self) -> bool {
        self.step(1)
    }

    /// Toolbar action: step to the previous numeric suffix.
    pub fn select_previous(&mut self) -> bool {
        self.step(-1)
    }

    /// Panel-local close. Also drops the hover mark, as the rendered close
    /// button does; the declaration mark stays.
    pub fn close_breadcrumb(&mut self) {
        self.state.breadcrumb.close();
        self.state.highlights.hover_clear();
    }

    /// Panel-local close for the symbol table.
    pub fn close_symbol_table(&mut self) {
        self.state.symbols.close();
        self.state.highlights.hover_clear();
    }

    // --- Read surface ---

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.dispatcher.selected()
    }

    /// Current fragment in shareable form (`#id`), if any.
    pub fn fragment(&self) -> Option<String> {
        self.dispatcher.fragment()
    }

    /// A link that reproduces the current selection and panel contents.
    pub fn share_link(&self, base: &Url) -> Url {
        let mut link = base.clone();
        link.set_fragment(self.selected().map(NodeId::as_str));
        link
    }

    pub fn breadcrumb(&self) -> &BreadcrumbPanel {
        &self.state.breadcrumb
    }

    /// The visible symbol table and its rows, if any.
    pub fn visible_symbols(&self) -> Option<(&NodeId, &[SymbolRow])> {
        let id = self.state.symbols.visible_table()?;
        let rows = self.doc.get(id).map(|a| a.symbols.as_slice())?;
        Some((id, rows))
    }

    pub fn highlights(&self) -> &HighlightSet {
        &self.state.highlights
    }

    fn step(&mut self, delta: i64) -> bool {
        let Some(current) = self.dispatcher.selected() else {
            return false;
        };
        let Some(next) = step_identity(current, delta) else {
            log::trace!(target: "treescope.nav", "{current} has no numeric suffix to step");
            return false;
        };
        self.dispatcher.click_node(&self.doc, &mut self.state, next);
        true
    }
}

// "node_3" + 1 -> "node_4". Identities without a numeric suffix (or where
// the step would go below zero) do not move.
fn step_identity(id: &NodeId, delta: i64) -> Option<NodeId> {
    let (prefix, suffix) = id.as_str().rsplit_once('_')?;
    let n: i64 = suffix.parse().ok()?;
    let next = n.checked_add(delta)?;
    if next < 0 {
        return None;
    }
    Some(NodeId::from(format!("{prefix}_{next}")))
}
