use alloc::vec::Vec;

use crate::{
  collections::queue::{PutterCell, QueueClosed, TakerCell},
  sync::{NoStdToolbox, RuntimeToolbox},
};

/// Companion action produced by an offer's decision phase.
///
/// `handoffs` pairs consumers that were removed from the wait list with the values they
/// receive; each pair is completed after the swap, exactly once.
pub enum OfferTransition<T, TB: RuntimeToolbox = NoStdToolbox>
where
  T: Send + 'static, {
  /// Every value was buffered or handed to a parked consumer; the caller is done.
  Accepted {
    /// Consumer cells to complete with their values after the swap.
    handoffs: Vec<(TakerCell<T, TB>, T)>,
  },
  /// A payload suffix did not fit; the caller must wait on `waiter`.
  Parked {
    /// Consumer cells to complete with their values after the swap.
    handoffs: Vec<(TakerCell<T, TB>, T)>,
    /// Cell completed once the parked suffix is fully accepted.
    waiter:   PutterCell<TB>,
  },
  /// The queue was closed before the offer committed anything.
  Rejected(QueueClosed),
}
