use alloc::vec::Vec;

use crate::collections::queue::QueueClosed;

/// Companion action produced by the non-suspending bulk withdrawals.
pub enum DrainTransition<T> {
  /// The drained prefix of the buffer, in order. Parked producers are left untouched.
  Drained(Vec<T>),
  /// The queue was closed before the drain.
  Rejected(QueueClosed),
}
