use alloc::vec::Vec;

use crate::collections::queue::close_cause::CloseCause;

/// Terminal outcome observed by every operation attempted on a closed queue.
///
/// Carries the causes supplied to the close call, in order. An empty cause list is a plain
/// close with no annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueClosed {
  causes: Vec<CloseCause>,
}

impl QueueClosed {
  /// Creates a closed marker carrying the provided causes.
  #[must_use]
  pub fn new(causes: Vec<CloseCause>) -> Self {
    Self { causes }
  }

  /// Returns the causes in the order they were supplied.
  #[must_use]
  pub fn causes(&self) -> &[CloseCause] {
    &self.causes
  }

  /// Consumes the marker and returns the causes.
  #[must_use]
  pub fn into_causes(self) -> Vec<CloseCause> {
    self.causes
  }
}

#[cfg(test)]
mod tests {
  use alloc::vec;

  use super::*;

  #[test]
  fn queue_closed_preserves_cause_order() {
    let closed = QueueClosed::new(vec![CloseCause::new("first"), CloseCause::new("second")]);
    let messages: Vec<&str> = closed.causes().iter().map(CloseCause::message).collect();
    assert_eq!(messages, vec!["first", "second"]);
  }

  #[test]
  fn queue_closed_default_has_no_causes() {
    let closed = QueueClosed::default();
    assert!(closed.causes().is_empty());
  }

  #[test]
  fn queue_closed_into_causes_round_trips() {
    let causes = vec![CloseCause::new("halt")];
    let closed = QueueClosed::new(causes.clone());
    assert_eq!(closed.into_causes(), causes);
  }
}
