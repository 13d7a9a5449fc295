use alloc::collections::VecDeque;

use crate::{
  collections::queue::PutterCell,
  sync::{NoStdToolbox, RuntimeToolbox},
};

/// Producer parked because its payload exceeded the available capacity.
///
/// Carries only the payload suffix that did not fit; the prefix was already committed to the
/// buffer by the producer's decision phase. The payload stays a sequence rather than being
/// flattened into the buffer so that cancelling the producer removes exactly its residual
/// values in one step.
pub struct PendingPutter<T, TB: RuntimeToolbox = NoStdToolbox>
where
  T: Send + 'static, {
  remaining: VecDeque<T>,
  done:      PutterCell<TB>,
}

impl<T, TB> PendingPutter<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  /// Creates a parked producer owing `remaining` values. The payload must not be empty.
  #[must_use]
  pub fn new(remaining: VecDeque<T>, done: PutterCell<TB>) -> Self {
    debug_assert!(!remaining.is_empty(), "a parked producer always owes at least one value");
    Self { remaining, done }
  }

  /// Returns the number of values still owed to the buffer.
  #[must_use]
  pub fn remaining_len(&self) -> usize {
    self.remaining.len()
  }

  /// Removes and returns the oldest owed value.
  pub fn pop_next(&mut self) -> Option<T> {
    self.remaining.pop_front()
  }

  /// Returns whether every owed value has been handed over.
  #[must_use]
  pub fn is_exhausted(&self) -> bool {
    self.remaining.is_empty()
  }

  /// Returns the completion cell resumed once the whole payload is accepted.
  #[must_use]
  pub fn done(&self) -> &PutterCell<TB> {
    &self.done
  }

  /// Consumes the record and returns its completion cell, discarding any owed values.
  #[must_use]
  pub fn into_done(self) -> PutterCell<TB> {
    self.done
  }
}
