// src/focus/scheduler.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce()>;

/// Runs work after the current synchronous turn finishes.
///
/// Deferral is fire-and-forget: there is no result, no failure channel and no
/// cancellation.
pub trait Scheduler {
  fn defer(&self, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
  fn defer(&self, task: Task) {
    (**self).defer(task);
  }
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
  fn defer(&self, task: Task) {
    (**self).defer(task);
  }
}

/// Zero-delay FIFO queue drained by the host's event loop.
#[derive(Default)]
pub struct DeferredQueue {
  tasks: RefCell<VecDeque<Task>>,
}

impl fmt::Debug for DeferredQueue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DeferredQueue").field("pending", &self.len()).finish()
  }
}

impl DeferredQueue {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.tasks.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.borrow().is_empty()
  }

  /// Runs every task queued before this call, in order, and returns how many
  /// ran. Tasks deferred while draining wait for the next call.
  pub fn run_pending(&self) -> usize {
    let batch = std::mem::take(&mut *self.tasks.borrow_mut());
    let ran = batch.len();
    for task in batch {
      task();
    }
    if ran > 0 {
      trace!(ran, "drained deferred tasks");
    }
    ran
  }
}

impl Scheduler for DeferredQueue {
  fn defer(&self, task: Task) {
    self.tasks.borrow_mut().push_back(task);
  }
}
