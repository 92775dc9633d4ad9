//! Keyboard focus management over a DOM-like element tree.
//!
//! The host supplies the tree and its focus state through [`ElementTree`] and
//! [`FocusHost`], and a [`Scheduler`] for deferred focus moves.
//! [`MemoryDocument`] and [`DeferredQueue`] are in-memory implementations.

pub mod document;
pub mod element;
pub mod keys;
pub mod navigation;
pub mod scheduler;

pub use document::{MemoryDocument, NodeId};
pub use element::{
  first_focusable, focusable_elements, is_focusable, last_focusable, matches_interactive_selector, ElementInfo,
  ElementTree,
};
pub use keys::{Key, KeyEvent};
pub use navigation::{
  next_in_sequence, ActivationHandler, EscapeHandler, FocusHost, FocusTrap, ListNavigationHandler,
};
pub use scheduler::{DeferredQueue, Scheduler, Task};
