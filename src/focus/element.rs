// src/focus/element.rs

//! Focusability rules over a DOM-like element tree.

use crate::types::FocusError;
use std::collections::BTreeMap;
use std::fmt;

/// Snapshot of one element: tag, attributes and rendered box size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementInfo {
  /// Lowercase tag name.
  pub tag: String,
  /// Attributes keyed by lowercase name.
  pub attributes: BTreeMap<String, String>,
  /// Rendered width in CSS pixels.
  pub width: f64,
  /// Rendered height in CSS pixels.
  pub height: f64,
}

impl ElementInfo {
  /// An element with no attributes and a zero-size box.
  pub fn new(tag: &str) -> Self {
    Self {
      tag: tag.to_ascii_lowercase(),
      ..Self::default()
    }
  }

  #[must_use]
  pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
    self.attributes.insert(name.to_ascii_lowercase(), value.to_owned());
    self
  }

  #[must_use]
  pub fn with_size(mut self, width: f64, height: f64) -> Self {
    self.width = width;
    self.height = height;
    self
  }

  pub fn attribute(&self, name: &str) -> Option<&str> {
    self.attributes.get(name).map(String::as_str)
  }

  pub fn has_attribute(&self, name: &str) -> bool {
    self.attributes.contains_key(name)
  }

  /// Parsed `tabindex`. Malformed values count as absent.
  pub fn tab_index(&self) -> Option<i32> {
    self.attribute("tabindex").and_then(|v| v.trim().parse().ok())
  }

  /// Non-zero rendered box.
  pub fn is_visible(&self) -> bool {
    self.width > 0.0 && self.height > 0.0
  }

  fn is_disabled(&self) -> bool {
    self.has_attribute("disabled")
  }

  fn is_hidden_input(&self) -> bool {
    self.tag == "input" && self.attribute("type").is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
  }

  fn is_content_editable(&self) -> bool {
    self
      .attribute("contenteditable")
      .is_some_and(|v| !v.eq_ignore_ascii_case("false"))
  }
}

/// Read access to a host element tree.
pub trait ElementTree {
  /// Element identity. Two handles are equal iff they name the same element.
  type Handle: Clone + PartialEq + fmt::Debug;

  /// Snapshot of `handle`, or `None` if it does not resolve.
  fn element(&self, handle: &Self::Handle) -> Option<ElementInfo>;

  /// All descendants of `container` in document order, excluding `container`
  /// itself. `None` if `container` does not resolve.
  fn descendants(&self, container: &Self::Handle) -> Option<Vec<Self::Handle>>;
}

/// Whether an element may receive keyboard focus.
///
/// Rejects `disabled`, `aria-hidden="true"`, `<input type="hidden">`, a
/// negative `tabindex`, and elements with an empty rendered box.
#[must_use]
pub fn is_focusable(info: &ElementInfo) -> bool {
  if info.is_disabled() || info.attribute("aria-hidden") == Some("true") || info.is_hidden_input() {
    return false;
  }
  if matches!(info.tab_index(), Some(t) if t < 0) {
    return false;
  }
  info.is_visible()
}

/// Whether an element is one of the interactive kinds scanned for focus:
/// `a[href]`, enabled `button`/`select`/`textarea`, enabled non-hidden
/// `input`, a numeric `tabindex >= 0`, or `contenteditable`.
#[must_use]
pub fn matches_interactive_selector(info: &ElementInfo) -> bool {
  let by_tag = match info.tag.as_str() {
    "a" => info.has_attribute("href"),
    "button" | "select" | "textarea" => !info.is_disabled(),
    "input" => !info.is_disabled() && !info.is_hidden_input(),
    _ => false,
  };
  by_tag || matches!(info.tab_index(), Some(t) if t >= 0) || info.is_content_editable()
}

/// Focusable descendants of `container`, in document order.
///
/// # Errors
/// [`FocusError::UnknownContainer`] if `container` does not resolve.
pub fn focusable_elements<T>(tree: &T, container: &T::Handle) -> Result<Vec<T::Handle>, FocusError>
where
  T: ElementTree + ?Sized,
{
  let handles = tree.descendants(container).ok_or(FocusError::UnknownContainer)?;
  Ok(
    handles
      .into_iter()
      .filter(|h| {
        tree
          .element(h)
          .is_some_and(|info| matches_interactive_selector(&info) && is_focusable(&info))
      })
      .collect(),
  )
}

/// First focusable descendant of `container`.
pub fn first_focusable<T>(tree: &T, container: &T::Handle) -> Result<Option<T::Handle>, FocusError>
where
  T: ElementTree + ?Sized,
{
  Ok(focusable_elements(tree, container)?.into_iter().next())
}

/// Last focusable descendant of `container`.
pub fn last_focusable<T>(tree: &T, container: &T::Handle) -> Result<Option<T::Handle>, FocusError>
where
  T: ElementTree + ?Sized,
{
  Ok(focusable_elements(tree, container)?.pop())
}
