use crate::{
  collections::queue::{PutterCell, QueueClosed, TakerCell},
  sync::{NoStdToolbox, RuntimeToolbox},
};

/// Companion action produced by a poll's decision phase.
pub enum PollTransition<T, TB: RuntimeToolbox = NoStdToolbox>
where
  T: Send + 'static, {
  /// The next value in order was removed for the caller.
  Delivered {
    /// Value handed to the caller.
    value:    T,
    /// Producer whose payload emptied as a result; its cell is completed after the swap.
    released: Option<PutterCell<TB>>,
  },
  /// No value was available; the caller must wait on `waiter`.
  Parked {
    /// Cell completed with the value eventually handed to this consumer.
    waiter: TakerCell<T, TB>,
  },
  /// The queue was closed before the poll.
  Rejected(QueueClosed),
}
