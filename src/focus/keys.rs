// src/focus/keys.rs

/// Logical key of a key-down event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
  ArrowUp,
  ArrowDown,
  ArrowLeft,
  ArrowRight,
  Home,
  End,
  Escape,
  Enter,
  Space,
  Tab,
  /// Any other single printable character.
  Character(char),
  /// Any other named key, as reported by the host.
  Other(String),
}

impl Key {
  /// Parses a DOM `KeyboardEvent.key` value. Legacy names (`"Down"`, `"Esc"`,
  /// `"Spacebar"`) map to their modern equivalents.
  #[must_use]
  pub fn from_dom(key: &str) -> Self {
    match key {
      "ArrowUp" | "Up" => Key::ArrowUp,
      "ArrowDown" | "Down" => Key::ArrowDown,
      "ArrowLeft" | "Left" => Key::ArrowLeft,
      "ArrowRight" | "Right" => Key::ArrowRight,
      "Home" => Key::Home,
      "End" => Key::End,
      "Escape" | "Esc" => Key::Escape,
      "Enter" => Key::Enter,
      " " | "Spacebar" => Key::Space,
      "Tab" => Key::Tab,
      other => {
        let mut chars = other.chars();
        match (chars.next(), chars.next()) {
          (Some(c), None) => Key::Character(c),
          _ => Key::Other(other.to_owned()),
        }
      }
    }
  }
}

impl From<&str> for Key {
  fn from(key: &str) -> Self {
    Key::from_dom(key)
  }
}

/// A key-down event as seen by the handlers in this module.
///
/// Handlers record their decision in `default_prevented` and
/// `propagation_stopped`; the host applies them to the real event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
  key: Key,
  shift: bool,
  default_prevented: bool,
  propagation_stopped: bool,
}

impl KeyEvent {
  pub fn new(key: Key) -> Self {
    Self {
      key,
      shift: false,
      default_prevented: false,
      propagation_stopped: false,
    }
  }

  /// Shorthand for `KeyEvent::new(Key::from_dom(key))`.
  pub fn from_dom(key: &str) -> Self {
    Self::new(Key::from_dom(key))
  }

  #[must_use]
  pub fn with_shift(mut self, shift: bool) -> Self {
    self.shift = shift;
    self
  }

  pub fn key(&self) -> &Key {
    &self.key
  }

  pub fn shift(&self) -> bool {
    self.shift
  }

  pub fn prevent_default(&mut self) {
    self.default_prevented = true;
  }

  pub fn stop_propagation(&mut self) {
    self.propagation_stopped = true;
  }

  /// Marks the event as fully consumed.
  pub(crate) fn consume(&mut self) {
    self.prevent_default();
    self.stop_propagation();
  }

  pub fn default_prevented(&self) -> bool {
    self.default_prevented
  }

  pub fn propagation_stopped(&self) -> bool {
    self.propagation_stopped
  }
}
