// src/focus/document.rs

//! In-memory element tree with focus tracking.

use super::element::{is_focusable, ElementInfo, ElementTree};
use super::navigation::FocusHost;
use crate::types::FocusError;
use std::cell::{Cell, RefCell};
use tracing::trace;

/// Handle into a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
  info: ElementInfo,
  parent: Option<NodeId>,
  children: Vec<NodeId>,
}

/// Arena-backed document with a `body` root and an active element.
///
/// All methods take `&self` so the document can be shared through `Rc` with
/// deferred focus tasks. Removed nodes leave a tombstone; their handles stop
/// resolving.
#[derive(Debug)]
pub struct MemoryDocument {
  nodes: RefCell<Vec<Option<Node>>>,
  active: Cell<Option<NodeId>>,
}

impl Default for MemoryDocument {
  fn default() -> Self {
    Self::new()
  }
}

impl MemoryDocument {
  /// Viewport size given to the `body` root.
  const BODY_SIZE: (f64, f64) = (1280.0, 800.0);

  pub fn new() -> Self {
    let body = Node {
      info: ElementInfo::new("body").with_size(Self::BODY_SIZE.0, Self::BODY_SIZE.1),
      parent: None,
      children: Vec::new(),
    };
    Self {
      nodes: RefCell::new(vec![Some(body)]),
      active: Cell::new(None),
    }
  }

  /// The root element.
  pub fn body(&self) -> NodeId {
    NodeId(0)
  }

  /// Appends `info` as the last child of `parent`.
  pub fn append(&self, parent: NodeId, info: ElementInfo) -> Result<NodeId, FocusError> {
    let mut nodes = self.nodes.borrow_mut();
    let id = NodeId(nodes.len());
    let parent_node = nodes
      .get_mut(parent.0)
      .and_then(Option::as_mut)
      .ok_or(FocusError::UnknownElement)?;
    parent_node.children.push(id);
    nodes.push(Some(Node {
      info,
      parent: Some(parent),
      children: Vec::new(),
    }));
    Ok(id)
  }

  /// Removes `id` and its subtree. Clears the active element if it was inside.
  pub fn remove(&self, id: NodeId) -> Result<(), FocusError> {
    let mut nodes = self.nodes.borrow_mut();
    let parent = nodes
      .get(id.0)
      .and_then(Option::as_ref)
      .ok_or(FocusError::UnknownElement)?
      .parent;
    if let Some(parent) = parent.and_then(|p| nodes.get_mut(p.0)).and_then(Option::as_mut) {
      parent.children.retain(|&c| c != id);
    }

    let mut stack = vec![id];
    while let Some(next) = stack.pop() {
      if let Some(node) = nodes.get_mut(next.0).and_then(Option::take) {
        stack.extend(node.children);
      }
      if self.active.get() == Some(next) {
        self.active.set(None);
      }
    }
    trace!(?id, "removed subtree");
    Ok(())
  }

  pub fn set_attribute(&self, id: NodeId, name: &str, value: &str) -> Result<(), FocusError> {
    self.with_node(id, |node| {
      node.info.attributes.insert(name.to_ascii_lowercase(), value.to_owned());
    })
  }

  pub fn remove_attribute(&self, id: NodeId, name: &str) -> Result<(), FocusError> {
    self.with_node(id, |node| {
      node.info.attributes.remove(&name.to_ascii_lowercase());
    })
  }

  pub fn set_size(&self, id: NodeId, width: f64, height: f64) -> Result<(), FocusError> {
    self.with_node(id, |node| {
      node.info.width = width;
      node.info.height = height;
    })
  }

  /// Clears the active element.
  pub fn blur(&self) {
    self.active.set(None);
  }

  fn with_node(&self, id: NodeId, f: impl FnOnce(&mut Node)) -> Result<(), FocusError> {
    let mut nodes = self.nodes.borrow_mut();
    let node = nodes
      .get_mut(id.0)
      .and_then(Option::as_mut)
      .ok_or(FocusError::UnknownElement)?;
    f(node);
    Ok(())
  }
}

impl ElementTree for MemoryDocument {
  type Handle = NodeId;

  fn element(&self, handle: &NodeId) -> Option<ElementInfo> {
    self.nodes.borrow().get(handle.0)?.as_ref().map(|n| n.info.clone())
  }

  fn descendants(&self, container: &NodeId) -> Option<Vec<NodeId>> {
    let nodes = self.nodes.borrow();
    let root = nodes.get(container.0)?.as_ref()?;
    let mut out = Vec::new();
    // Pre-order walk; children pushed in reverse so they pop in order.
    let mut stack: Vec<NodeId> = root.children.iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
      if let Some(node) = nodes.get(id.0).and_then(Option::as_ref) {
        out.push(id);
        stack.extend(node.children.iter().rev().copied());
      }
    }
    Some(out)
  }
}

impl FocusHost for MemoryDocument {
  fn active_element(&self) -> Option<NodeId> {
    self.active.get()
  }

  /// Moves focus to `handle` if it resolves and passes [`is_focusable`].
  fn focus(&self, handle: &NodeId) -> bool {
    match self.element(handle) {
      Some(info) if is_focusable(&info) => {
        self.active.set(Some(*handle));
        true
      }
      _ => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn button() -> ElementInfo {
    ElementInfo::new("button").with_size(80.0, 24.0)
  }

  #[test]
  fn test_descendants_in_document_order() {
    let doc = MemoryDocument::new();
    let list = doc.append(doc.body(), ElementInfo::new("ul").with_size(200.0, 100.0)).unwrap();
    let li1 = doc.append(list, ElementInfo::new("li")).unwrap();
    let a = doc.append(li1, button()).unwrap();
    let li2 = doc.append(list, ElementInfo::new("li")).unwrap();
    let b = doc.append(li2, button()).unwrap();

    assert_eq!(doc.descendants(&list), Some(vec![li1, a, li2, b]));
    assert_eq!(doc.descendants(&doc.body()), Some(vec![list, li1, a, li2, b]));
  }

  #[test]
  fn test_remove_subtree() {
    let doc = MemoryDocument::new();
    let list = doc.append(doc.body(), ElementInfo::new("ul")).unwrap();
    let a = doc.append(list, button()).unwrap();
    assert!(doc.focus(&a));
    doc.remove(list).unwrap();

    assert_eq!(doc.element(&a), None);
    assert_eq!(doc.descendants(&list), None);
    assert_eq!(doc.active_element(), None);
    assert_eq!(doc.descendants(&doc.body()), Some(vec![]));
    assert_eq!(doc.remove(list), Err(FocusError::UnknownElement));
    assert_eq!(doc.append(list, button()), Err(FocusError::UnknownElement));
  }

  #[test]
  fn test_focus_requires_focusable() {
    let doc = MemoryDocument::new();
    let ok = doc.append(doc.body(), button()).unwrap();
    let disabled = doc.append(doc.body(), button().with_attribute("disabled", "")).unwrap();

    assert!(!doc.focus(&disabled));
    assert_eq!(doc.active_element(), None);
    assert!(doc.focus(&ok));
    assert_eq!(doc.active_element(), Some(ok));
    doc.blur();
    assert_eq!(doc.active_element(), None);
  }

  #[test]
  fn test_attribute_mutation() {
    let doc = MemoryDocument::new();
    let b = doc.append(doc.body(), button()).unwrap();
    doc.set_attribute(b, "Disabled", "").unwrap();
    assert!(doc.element(&b).unwrap().has_attribute("disabled"));
    doc.remove_attribute(b, "disabled").unwrap();
    assert!(!doc.element(&b).unwrap().has_attribute("disabled"));
    doc.set_size(b, 0.0, 0.0).unwrap();
    assert!(!doc.element(&b).unwrap().is_visible());
  }
}
