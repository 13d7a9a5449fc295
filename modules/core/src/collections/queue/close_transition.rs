use alloc::vec::Vec;

use crate::{
  collections::queue::{PutterCell, QueueClosed, TakerCell},
  sync::{NoStdToolbox, RuntimeToolbox},
};

/// Companion action produced by a close's decision phase.
pub enum CloseTransition<T, TB: RuntimeToolbox = NoStdToolbox>
where
  T: Send + 'static, {
  /// The queue was already closed; the original causes stand and nothing is interrupted.
  AlreadyClosed,
  /// The queue just transitioned to closed; every listed waiter is interrupted after the swap.
  Interrupted {
    /// Parked producers to interrupt. Their undelivered payloads were discarded by the swap.
    putters: Vec<PutterCell<TB>>,
    /// Parked consumers to interrupt.
    takers:  Vec<TakerCell<T, TB>>,
    /// Marker delivered to every interrupted waiter.
    closed:  QueueClosed,
  },
}
