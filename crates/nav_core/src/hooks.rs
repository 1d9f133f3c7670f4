//! Ordered synchronous fan-out of selection changes.
//!
//! An explicit list of subscribers rather than a platform event bus, so
//! registration order and delivery order are program-visible and testable.

use doc_model::{Document, NodeId};

/// A subscriber notified whenever the selected node changes.
///
/// `S` is the integration layer's panel state. Hooks read the document and
/// mutate only that state; the document itself is never written.
pub trait SelectionHook<S> {
    fn on_select(&mut self, doc: &Document, state: &mut S, selected: &NodeId);
}

impl<S, F> SelectionHook<S> for F
where
    F: FnMut(&Document, &mut S, &NodeId),
{
    fn on_select(&mut self, doc: &Document, state: &mut S, selected: &NodeId) {
        self(doc, state, selected)
    }
}

/// Append-only, ordered list of [`SelectionHook`]s.
///
/// No deduplication: registering the same hook twice invokes it twice.
/// Hooks cannot unregister during dispatch; the list is only appended to
/// for the core's lifetime.
pub struct HookRegistry<S> {
    hooks: Vec<Box<dyn SelectionHook<S>>>,
}

impl<S> Default for HookRegistry<S> {
    fn default() -> Self {
        Self { hooks: Vec::new() }
    }
}

impl<S> HookRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Box<dyn SelectionHook<S>>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Invoke every hook, in registration order, with the same identity.
    pub fn dispatch(&mut self, doc: &Document, state: &mut S, selected: &NodeId) {
        log::trace!(
            target: "treescope.nav",
            "dispatch {selected} to {} hooks",
            self.hooks.len()
        );
        for hook in &mut self.hooks {
            hook.on_select(doc, state, selected);
        }
    }
}

impl<S> std::fmt::Debug for HookRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
