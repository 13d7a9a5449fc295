use alloc::{borrow::Cow, string::String};

/// Failure annotation recorded when a queue is closed.
///
/// Causes are free-form labels supplied by the closer. They are delivered verbatim to every
/// waiter interrupted by the close and to every operation attempted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseCause {
  message: Cow<'static, str>,
}

impl CloseCause {
  /// Creates a cause carrying the provided message.
  pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
    Self { message: message.into() }
  }

  /// Returns the message carried by this cause.
  #[must_use]
  pub fn message(&self) -> &str {
    &self.message
  }
}

impl From<&'static str> for CloseCause {
  fn from(message: &'static str) -> Self {
    Self::new(message)
  }
}

impl From<String> for CloseCause {
  fn from(message: String) -> Self {
    Self::new(message)
  }
}
