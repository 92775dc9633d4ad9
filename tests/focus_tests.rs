// tests/focus_tests.rs

use std::cell::Cell;
use std::rc::Rc;
use swing_core::*;

fn button() -> ElementInfo {
  ElementInfo::new("button").with_size(96.0, 32.0)
}

/// Container with three visible, enabled buttons.
fn toolbar() -> (Rc<MemoryDocument>, NodeId, [NodeId; 3]) {
  let doc = Rc::new(MemoryDocument::new());
  let container = doc
    .append(doc.body(), ElementInfo::new("div").with_attribute("role", "menu").with_size(320.0, 120.0))
    .unwrap();
  let a = doc.append(container, button()).unwrap();
  let b = doc.append(container, button()).unwrap();
  let c = doc.append(container, button()).unwrap();
  (doc, container, [a, b, c])
}

#[test]
fn test_focusable_elements_filters_and_keeps_order() {
  let doc = MemoryDocument::new();
  let form = doc.append(doc.body(), ElementInfo::new("form").with_size(400.0, 400.0)).unwrap();

  let mut expected = Vec::new();
  let link = ElementInfo::new("a").with_attribute("href", "/board").with_size(40.0, 16.0);
  expected.push(doc.append(form, link).unwrap());
  // Disabled, hidden, zero-size and inert elements are skipped.
  doc.append(form, button().with_attribute("disabled", "")).unwrap();
  doc.append(form, ElementInfo::new("input").with_attribute("type", "hidden").with_size(1.0, 1.0)).unwrap();
  doc.append(form, ElementInfo::new("button")).unwrap();
  doc.append(form, button().with_attribute("aria-hidden", "true")).unwrap();
  doc.append(form, ElementInfo::new("div").with_attribute("tabindex", "-1").with_size(10.0, 10.0)).unwrap();
  doc.append(form, ElementInfo::new("div").with_attribute("tabindex", "oops").with_size(10.0, 10.0)).unwrap();
  doc.append(form, ElementInfo::new("a").with_size(40.0, 16.0)).unwrap();

  let fieldset = doc.append(form, ElementInfo::new("fieldset").with_size(300.0, 200.0)).unwrap();
  let email = ElementInfo::new("input").with_attribute("type", "email").with_size(200.0, 24.0);
  expected.push(doc.append(fieldset, email).unwrap());
  expected.push(doc.append(fieldset, ElementInfo::new("select").with_size(200.0, 24.0)).unwrap());
  expected.push(doc.append(form, ElementInfo::new("textarea").with_size(200.0, 80.0)).unwrap());
  let tabbable = ElementInfo::new("div").with_attribute("tabindex", "0").with_size(10.0, 10.0);
  expected.push(doc.append(form, tabbable).unwrap());
  let editable = ElementInfo::new("div").with_attribute("contenteditable", "true").with_size(200.0, 80.0);
  expected.push(doc.append(form, editable).unwrap());
  expected.push(doc.append(form, button()).unwrap());

  assert_eq!(focusable_elements(&doc, &form), Ok(expected.clone()));
  assert_eq!(first_focusable(&doc, &form), Ok(expected.first().copied()));
  assert_eq!(last_focusable(&doc, &form), Ok(expected.last().copied()));
}

#[test]
fn test_empty_container() {
  let doc = MemoryDocument::new();
  let empty = doc.append(doc.body(), ElementInfo::new("div").with_size(10.0, 10.0)).unwrap();
  assert_eq!(focusable_elements(&doc, &empty), Ok(vec![]));
  assert_eq!(first_focusable(&doc, &empty), Ok(None));
  assert_eq!(last_focusable(&doc, &empty), Ok(None));
}

#[test]
fn test_unknown_container_is_an_error() {
  let doc = MemoryDocument::new();
  let gone = doc.append(doc.body(), ElementInfo::new("div")).unwrap();
  doc.remove(gone).unwrap();
  assert_eq!(focusable_elements(&doc, &gone), Err(FocusError::UnknownContainer));
  assert_eq!(first_focusable(&doc, &gone), Err(FocusError::UnknownContainer));
}

#[test]
fn test_keyboard_scenario() {
  let (doc, container, [b1, b2, b3]) = toolbar();
  let queue = Rc::new(DeferredQueue::new());
  let handler = ListNavigationHandler::new(
    Rc::clone(&doc),
    Rc::clone(&queue),
    container,
    NavigationOptions::default(),
  );

  // ArrowDown from button 1.
  assert!(doc.focus(&b1));
  let mut down = KeyEvent::from_dom("ArrowDown");
  assert_eq!(handler.handle(&mut down), Some(b2));
  assert!(down.default_prevented());
  queue.run_pending();
  assert_eq!(doc.active_element(), Some(b2));

  // Home from button 3.
  assert!(doc.focus(&b3));
  let mut home = KeyEvent::from_dom("Home");
  assert_eq!(handler.handle(&mut home), Some(b1));
  queue.run_pending();
  assert_eq!(doc.active_element(), Some(b1));

  // ArrowRight in vertical-only mode passes through.
  let mut right = KeyEvent::from_dom("ArrowRight");
  assert_eq!(handler.handle(&mut right), None);
  assert!(!right.default_prevented());
  assert_eq!(queue.run_pending(), 0);
}

#[test]
fn test_full_cycle_wraps() {
  let (doc, container, [b1, b2, b3]) = toolbar();
  let queue = DeferredQueue::new();
  let handler = ListNavigationHandler::new(Rc::clone(&doc), &queue, container, NavigationOptions::default());
  doc.focus(&b1);

  let mut visited = Vec::new();
  for _ in 0..4 {
    handler.handle(&mut KeyEvent::from_dom("ArrowDown"));
    queue.run_pending();
    visited.extend(doc.active_element());
  }
  assert_eq!(visited, vec![b2, b3, b1, b2]);
}

#[test]
fn test_escape_closes_dialog() {
  let (doc, container, [b1, _, b3]) = toolbar();
  let queue = DeferredQueue::new();
  let trap = FocusTrap::new(Rc::clone(&doc), &queue, container);
  let open = Cell::new(true);
  let mut escape = EscapeHandler::new(|| open.set(false));

  doc.focus(&b3);
  assert_eq!(trap.handle(&mut KeyEvent::from_dom("Tab")), Some(b1));
  assert!(escape.handle(&mut KeyEvent::from_dom("Escape")));
  assert!(!open.get());
}
