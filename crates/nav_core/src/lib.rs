//! # nav_core
//!
//! UI-agnostic navigation/state synchronization layer for the tree viewer.
//!
//! This crate provides the building blocks that keep "selected node",
//! "URL fragment", and every panel subscriber mutually consistent:
//! - [`HashRouter`]: single-slot selection state, source of truth, encoded
//!   as the URL fragment
//! - [`HookRegistry`] and [`SelectionHook`]: ordered synchronous fan-out of
//!   selection changes
//! - [`SelectionDispatcher`]: funnels clicks and fragment changes (browser
//!   back/forward included) into one dispatch path
//! - [`HighlightSet`]: the two disjoint highlight kinds (hover, declaration)
//!
//! ## Design Principles
//!
//! Subscribers receive the read-only [`doc_model::Document`] plus a mutable
//! reference to the integration layer's own panel state (`S`). Dispatch is
//! strictly sequential in registration order, so a later hook observes the
//! panel state exactly as earlier hooks left it. Because the dispatcher is
//! mutably borrowed for the whole round, a hook cannot re-enter
//! `set_selected` during its own notification.

mod dispatcher;
mod fragment;
mod hash;
mod highlight;
mod hooks;

pub use crate::dispatcher::SelectionDispatcher;
pub use crate::fragment::{format_fragment, parse_fragment};
pub use crate::hash::{FragmentChange, HashRouter};
pub use crate::highlight::HighlightSet;
pub use crate::hooks::{HookRegistry, SelectionHook};
