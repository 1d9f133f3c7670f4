//! Funnels user gestures and fragment changes into one dispatch path.
//!
//! Clicks never render panels directly: they only write the fragment, and
//! the resulting fragment change is what fans out to the hooks. Browser
//! back/forward navigation therefore takes exactly the same path as a live
//! click.

use crate::fragment;
use crate::hash::{FragmentChange, HashRouter};
use crate::hooks::{HookRegistry, SelectionHook};
use doc_model::{Document, NodeId};

/// Two states: Idle (no fragment) and NodeSelected (fragment set). Both are
/// carried by the router's slot; there is no terminal state.
#[derive(Debug)]
pub struct SelectionDispatcher<S> {
    router: HashRouter,
    hooks: HookRegistry<S>,
}

impl<S> Default for SelectionDispatcher<S> {
    fn default() -> Self {
        Self {
            router: HashRouter::new(),
            hooks: HookRegistry::new(),
        }
    }
}

impl<S> SelectionDispatcher<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Box<dyn SelectionHook<S>>) {
        self.hooks.register(hook);
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.router.selected()
    }

    pub fn fragment(&self) -> Option<String> {
        self.router.fragment()
    }

    /// Startup transition: when the URL carried a fragment at load, perform
    /// the fragment-change side effect once so panels reflect the initial
    /// URL without an extra user action. Malformed fragments leave the
    /// dispatcher Idle.
    pub fn startup(&mut self, doc: &Document, state: &mut S, raw_fragment: Option<&str>) {
        let Some(raw) = raw_fragment else {
            return;
        };
        self.fragment_changed(doc, state, raw);
    }

    /// Gesture (a): direct click on node `id`.
    pub fn click_node(&mut self, doc: &Document, state: &mut S, id: NodeId) {
        self.route(doc, state, id);
    }

    /// Gesture (b): click on a breadcrumb or reference entry carrying
    /// `target`: the carried identity is selected, not the clicked element.
    pub fn click_reference(&mut self, doc: &Document, state: &mut S, target: NodeId) {
        self.route(doc, state, target);
    }

    /// The browser reported a fragment change (back/forward navigation or a
    /// rewrite this dispatcher initiated). This is the ONLY trigger for
    /// panel re-rendering.
    pub fn fragment_changed(&mut self, doc: &Document, state: &mut S, raw: &str) {
        match fragment::parse_fragment(raw) {
            Some(id) => {
                self.router.sync(id.clone());
                self.notify(doc, state, &id);
            }
            None => {
                log::trace!(target: "treescope.nav", "fragment {raw:?} is no selection");
                self.router.clear();
            }
        }
    }

    /// One extra dispatch round for the current selection. Returns whether a
    /// round ran (false when Idle).
    pub fn reselect(&mut self, doc: &Document, state: &mut S) -> bool {
        let Some(id) = self.router.selected().cloned() else {
            return false;
        };
        self.route(doc, state, id);
        true
    }

    fn route(&mut self, doc: &Document, state: &mut S, id: NodeId) {
        let change = self.router.set_selected(id);
        self.deliver(doc, state, change);
    }

    // Every FragmentChange becomes exactly one dispatch round.
    fn deliver(&mut self, doc: &Document, state: &mut S, change: FragmentChange) {
        self.notify(doc, state, change.selected());
    }

    fn notify(&mut self, doc: &Document, state: &mut S, id: &NodeId) {
        if !doc.contains(id) {
            // Caller error per the router contract: panels end empty, never
            // a crash.
            log::warn!(target: "treescope.nav", "selected {id} is not in the document");
        }
        self.hooks.dispatch(doc, state, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::fixtures;

    /// Recording state: every (hook index, selected id) delivery.
    type Log = Vec<(usize, NodeId)>;

    fn recording_dispatcher(hooks: usize) -> SelectionDispatcher<Log> {
        let mut d = SelectionDispatcher::new();
        for i in 0..hooks {
            d.register(Box::new(
                move |_: &Document, log: &mut Log, id: &NodeId| log.push((i, id.clone())),
            ));
        }
        d
    }

    #[test]
    fn click_dispatches_once_to_every_hook_in_order() {
        let doc = fixtures::class_with_members();
        let mut d = recording_dispatcher(3);
        let mut log = Log::new();

        d.click_node(&doc, &mut log, NodeId::from("node_2"));

        assert_eq!(d.fragment().as_deref(), Some("#node_2"));
        assert_eq!(
            log,
            vec![
                (0, NodeId::from("node_2")),
                (1, NodeId::from("node_2")),
                (2, NodeId::from("node_2")),
            ]
        );
    }

    #[test]
    fn reselecting_the_same_node_refires_a_full_round() {
        let doc = fixtures::class_with_members();
        let mut d = recording_dispatcher(2);
        let mut log = Log::new();

        d.click_node(&doc, &mut log, NodeId::from("node_1"));
        d.click_node(&doc, &mut log, NodeId::from("node_1"));

        // Idempotent visible effect, non-idempotent dispatch count.
        assert_eq!(log.len(), 4);
        assert!(log.iter().all(|(_, id)| id == &NodeId::from("node_1")));
    }

    #[test]
    fn fragment_change_takes_the_same_path_as_a_click() {
        let doc = fixtures::class_with_members();
        let mut d = recording_dispatcher(2);
        let mut log = Log::new();

        d.fragment_changed(&doc, &mut log, "#node_3");

        assert_eq!(d.selected(), Some(&NodeId::from("node_3")));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn startup_with_fragment_dispatches_without_a_user_action() {
        let doc = fixtures::class_with_members();
        let mut d = recording_dispatcher(2);
        let mut log = Log::new();

        d.startup(&doc, &mut log, Some("#node_1"));

        assert_eq!(d.selected(), Some(&NodeId::from("node_1")));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn startup_without_fragment_stays_idle() {
        let doc = fixtures::class_with_members();
        let mut d = recording_dispatcher(2);
        let mut log = Log::new();

        d.startup(&doc, &mut log, None);
        assert_eq!(d.selected(), None);
        assert!(log.is_empty());
    }

    #[test]
    fn malformed_fragment_returns_to_idle_without_dispatch() {
        let doc = fixtures::class_with_members();
        let mut d = recording_dispatcher(1);
        let mut log = Log::new();

        d.click_node(&doc, &mut log, NodeId::from("node_1"));
        log.clear();

        d.fragment_changed(&doc, &mut log, "#two words");
        assert_eq!(d.selected(), None);
        assert!(log.is_empty());
    }

    #[test]
    fn unknown_target_still_dispatches() {
        let doc = fixtures::class_with_members();
        let mut d = recording_dispatcher(1);
        let mut log = Log::new();

        d.click_node(&doc, &mut log, NodeId::from("node_99"));
        assert_eq!(d.fragment().as_deref(), Some("#node_99"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn reselect_runs_one_round_only_when_selected() {
        let doc = fixtures::class_with_members();
        let mut d = recording_dispatcher(2);
        let mut log = Log::new();

        assert!(!d.reselect(&doc, &mut log));
        assert!(log.is_empty());

        d.click_node(&doc, &mut log, NodeId::from("root"));
        log.clear();
        assert!(d.reselect(&doc, &mut log));
        assert_eq!(log.len(), 2);
    }
}
