// src/focus/navigation.rs

//! Keyboard handlers that move focus through the focusable descendants of a
//! container.
//!
//! Handlers keep no state between key presses. Each press reads the host's
//! current focus and rescans the container, so a re-render between presses
//! is picked up automatically. The focus move itself is handed to a
//! [`Scheduler`] and happens after the current turn.

use super::element::{focusable_elements, ElementTree};
use super::keys::{Key, KeyEvent};
use super::scheduler::Scheduler;
use crate::types::{NavigationAxis, NavigationOptions, SequenceDirection};
use std::rc::Rc;
use tracing::{debug, trace};

/// Host focus state.
pub trait FocusHost: ElementTree {
  /// The element that currently has focus.
  fn active_element(&self) -> Option<Self::Handle>;

  /// Moves focus to `handle`. Returns `false` when the element cannot take
  /// focus; callers treat that as a no-op.
  fn focus(&self, handle: &Self::Handle) -> bool;
}

/// Neighbor of `current` in `elements`, wrapping at both ends.
///
/// Returns `None` if `elements` is empty or does not contain `current`.
#[must_use]
pub fn next_in_sequence<T>(elements: &[T], current: &T, direction: SequenceDirection) -> Option<T>
where
  T: PartialEq + Clone,
{
  let len = elements.len();
  let idx = elements.iter().position(|e| e == current)?;
  let next = match direction {
    SequenceDirection::Next => (idx + 1) % len,
    SequenceDirection::Previous => (idx + len - 1) % len,
  };
  elements.get(next).cloned()
}

/// Queues a focus move to `target` on `scheduler`.
fn schedule_focus<D, S>(document: &Rc<D>, scheduler: &S, target: D::Handle)
where
  D: FocusHost + 'static,
  D::Handle: 'static,
  S: Scheduler + ?Sized,
{
  let document = Rc::clone(document);
  scheduler.defer(Box::new(move || {
    if !document.focus(&target) {
      debug!(?target, "focus move declined by host");
    }
  }));
}

#[derive(Debug, Clone, Copy)]
enum Step {
  Sequence(SequenceDirection),
  First,
  Last,
}

/// Arrow-key navigation over a container's focusable descendants.
///
/// Arrow keys for the configured [`NavigationAxis`] move to the next or
/// previous element with wrap-around; `Home` and `End` jump to the ends on
/// any axis. Other keys pass through untouched.
pub struct ListNavigationHandler<D: FocusHost, S> {
  document: Rc<D>,
  scheduler: S,
  container: D::Handle,
  axis: NavigationAxis,
}

impl<D, S> ListNavigationHandler<D, S>
where
  D: FocusHost + 'static,
  D::Handle: 'static,
  S: Scheduler,
{
  pub fn new(document: Rc<D>, scheduler: S, container: D::Handle, options: NavigationOptions) -> Self {
    Self {
      document,
      scheduler,
      container,
      axis: options.axis(),
    }
  }

  pub fn axis(&self) -> NavigationAxis {
    self.axis
  }

  pub fn container(&self) -> &D::Handle {
    &self.container
  }

  fn step_for(&self, key: &Key) -> Option<Step> {
    match key {
      Key::ArrowDown if self.axis.vertical() => Some(Step::Sequence(SequenceDirection::Next)),
      Key::ArrowUp if self.axis.vertical() => Some(Step::Sequence(SequenceDirection::Previous)),
      Key::ArrowRight if self.axis.horizontal() => Some(Step::Sequence(SequenceDirection::Next)),
      Key::ArrowLeft if self.axis.horizontal() => Some(Step::Sequence(SequenceDirection::Previous)),
      Key::Home => Some(Step::First),
      Key::End => Some(Step::Last),
      _ => None,
    }
  }

  /// Handles one key-down event.
  ///
  /// On a match the event is consumed and a focus move is scheduled; the
  /// scheduled target is returned. The handler is a no-op when nothing has
  /// focus, the focused element is not one of the container's focusable
  /// elements, or the container no longer resolves.
  pub fn handle(&self, event: &mut KeyEvent) -> Option<D::Handle> {
    let step = self.step_for(event.key())?;

    let Some(current) = self.document.active_element() else {
      trace!(key = ?event.key(), "no active element");
      return None;
    };
    let elements = match focusable_elements(&*self.document, &self.container) {
      Ok(elements) => elements,
      Err(e) => {
        debug!(error = %e, container = ?self.container, "navigation on detached container");
        return None;
      }
    };
    if !elements.contains(&current) {
      trace!(?current, "focus is outside the navigable set");
      return None;
    }

    let target = match step {
      Step::Sequence(direction) => next_in_sequence(&elements, &current, direction),
      Step::First => elements.first().cloned(),
      Step::Last => elements.last().cloned(),
    }?;

    event.consume();
    trace!(key = ?event.key(), from = ?current, to = ?target, "list navigation");
    schedule_focus(&self.document, &self.scheduler, target.clone());
    Some(target)
  }
}

/// `Tab` / `Shift+Tab` cycling confined to a container, as used by modals.
///
/// `Tab` on the last focusable element wraps to the first and `Shift+Tab` on
/// the first wraps to the last. Focus that has escaped the container is
/// pulled back in. Between the ends the browser's own tab order applies.
pub struct FocusTrap<D: FocusHost, S> {
  document: Rc<D>,
  scheduler: S,
  container: D::Handle,
}

impl<D, S> FocusTrap<D, S>
where
  D: FocusHost + 'static,
  D::Handle: 'static,
  S: Scheduler,
{
  pub fn new(document: Rc<D>, scheduler: S, container: D::Handle) -> Self {
    Self {
      document,
      scheduler,
      container,
    }
  }

  /// Handles one key-down event; returns the scheduled target, if any.
  pub fn handle(&self, event: &mut KeyEvent) -> Option<D::Handle> {
    if *event.key() != Key::Tab {
      return None;
    }
    let elements = focusable_elements(&*self.document, &self.container).ok()?;
    let (first, last) = (elements.first()?, elements.last()?);
    let current = self.document.active_element();
    let inside = current.as_ref().is_some_and(|c| elements.contains(c));

    let target = if event.shift() {
      (!inside || current.as_ref() == Some(first)).then(|| last.clone())
    } else {
      (!inside || current.as_ref() == Some(last)).then(|| first.clone())
    }?;

    event.consume();
    trace!(shift = event.shift(), to = ?target, "focus trap wrap");
    schedule_focus(&self.document, &self.scheduler, target.clone());
    Some(target)
  }
}

/// Calls `on_escape` for `Escape` and consumes the event.
pub struct EscapeHandler<F: FnMut()> {
  on_escape: F,
}

impl<F: FnMut()> EscapeHandler<F> {
  pub fn new(on_escape: F) -> Self {
    Self { on_escape }
  }

  /// Returns whether the event matched.
  pub fn handle(&mut self, event: &mut KeyEvent) -> bool {
    if *event.key() != Key::Escape {
      return false;
    }
    event.consume();
    (self.on_escape)();
    true
  }
}

/// Calls `on_activate` for `Enter` or `Space` and consumes the event.
pub struct ActivationHandler<F: FnMut()> {
  on_activate: F,
}

impl<F: FnMut()> ActivationHandler<F> {
  pub fn new(on_activate: F) -> Self {
    Self { on_activate }
  }

  /// Returns whether the event matched.
  pub fn handle(&mut self, event: &mut KeyEvent) -> bool {
    if !matches!(event.key(), Key::Enter | Key::Space) {
      return false;
    }
    event.consume();
    (self.on_activate)();
    true
  }
}
