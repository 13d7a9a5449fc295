use alloc::{collections::VecDeque, vec::Vec};

use self::{putter_wait::PutterWait, queue_core::QueueCore, taker_wait::TakerWait};
use crate::{
  collections::queue::{
    CloseCause, CloseTransition, DrainTransition, OfferTransition, PollTransition, QueueClosed, QueueDepth,
    QueueState, TakerCell,
  },
  sync::{ArcShared, NoStdToolbox, RuntimeToolbox},
};

mod putter_wait;
mod queue_core;
mod taker_wait;


/// Asynchronous bounded FIFO queue shared by any number of producers and consumers.
///
/// Producers deposit values with [`offer`](Self::offer) / [`offer_all`](Self::offer_all) and
/// park while the queue is full; consumers withdraw values with [`poll`](Self::poll) and park
/// while it is empty. [`poll_all`](Self::poll_all) and [`poll_up_to`](Self::poll_up_to) drain
/// the buffer without ever suspending. [`close_with`](Self::close_with) interrupts every parked
/// waiter exactly once and fails every later operation with the supplied causes.
///
/// Every operation runs as a single atomic replacement of the internal state followed by side
/// effects on completion cells that were removed from the state by that same replacement, so
/// no side effect ever races with a later transition. Cloning the handle shares the queue.
pub struct AsyncMpmcQueue<T, TB: RuntimeToolbox = NoStdToolbox>
where
  T: Send + 'static, {
  core: ArcShared<QueueCore<T, TB>>,
}

impl<T, TB> AsyncMpmcQueue<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  /// Creates a queue that buffers at most `capacity` values.
  ///
  /// # Panics
  ///
  /// Panics when `capacity` is zero; a queue that can hold nothing cannot rendezvous.
  #[must_use]
  pub fn bounded(capacity: usize) -> Self {
    assert!(capacity > 0, "queue capacity must be positive");
    Self { core: ArcShared::new(QueueCore::new(capacity)) }
  }

  /// Creates a queue with an effectively unlimited buffer.
  #[must_use]
  pub fn unbounded() -> Self {
    Self::bounded(usize::MAX)
  }

  /// Returns the maximum number of buffered values.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.core.capacity
  }

  /// Deposits one value, parking until a slot is free.
  ///
  /// # Errors
  ///
  /// Returns the close causes when the queue is closed before the value is accepted.
  pub async fn offer(&self, item: T) -> Result<(), QueueClosed> {
    self.offer_all(core::iter::once(item)).await
  }

  /// Deposits every value of `items` in order, parking until all of them are accepted.
  ///
  /// Values are handed to parked consumers first, buffered while room remains, and the suffix
  /// that does not fit parks the caller until consumers make space. An empty `items` completes
  /// immediately.
  ///
  /// # Errors
  ///
  /// Returns the close causes when the queue is closed before every value is accepted. A
  /// payload suffix parked at close time is discarded; the prefix committed by the decision
  /// phase stays committed.
  pub async fn offer_all<I>(&self, items: I) -> Result<(), QueueClosed>
  where
    I: IntoIterator<Item = T>, {
    let items: VecDeque<T> = items.into_iter().collect();
    let capacity = self.core.capacity;
    let transition = self.core.state.update(|state| state.offer(items, capacity));
    match transition {
      | OfferTransition::Accepted { handoffs } => {
        Self::hand_off(handoffs);
        Ok(())
      },
      | OfferTransition::Parked { handoffs, waiter } => {
        Self::hand_off(handoffs);
        PutterWait::new(self.core.clone(), waiter).await
      },
      | OfferTransition::Rejected(closed) => Err(closed),
    }
  }

  // Post-swap completion of consumers removed from the wait list by an offer's decision phase.
  fn hand_off(handoffs: Vec<(TakerCell<T, TB>, T)>) {
    for (taker, value) in handoffs {
      taker.complete(value);
    }
  }

  /// Withdraws the next value in arrival order, parking until one is available.
  ///
  /// # Errors
  ///
  /// Returns the close causes when the queue is closed before a value arrives.
  pub async fn poll(&self) -> Result<T, QueueClosed> {
    let transition = self.core.state.update(QueueState::poll);
    match transition {
      | PollTransition::Delivered { value, released } => {
        if let Some(putter) = released {
          putter.complete(());
        }
        Ok(value)
      },
      | PollTransition::Parked { waiter } => TakerWait::new(self.core.clone(), waiter).await,
      | PollTransition::Rejected(closed) => Err(closed),
    }
  }

  /// Withdraws every buffered value at once, never suspending.
  ///
  /// Parked producers are not disturbed; their payloads surface through later polls and
  /// offers.
  ///
  /// # Errors
  ///
  /// Returns the close causes when the queue is closed.
  pub fn poll_all(&self) -> Result<Vec<T>, QueueClosed> {
    match self.core.state.update(QueueState::drain_all) {
      | DrainTransition::Drained(values) => Ok(values),
      | DrainTransition::Rejected(closed) => Err(closed),
    }
  }

  /// Withdraws at most `max` buffered values, never suspending.
  ///
  /// # Errors
  ///
  /// Returns the close causes when the queue is closed.
  pub fn poll_up_to(&self, max: usize) -> Result<Vec<T>, QueueClosed> {
    match self.core.state.update(|state| state.drain_up_to(max)) {
      | DrainTransition::Drained(values) => Ok(values),
      | DrainTransition::Rejected(closed) => Err(closed),
    }
  }

  /// Reports the current fill level.
  ///
  /// # Errors
  ///
  /// Returns the close causes when the queue is closed.
  pub fn depth(&self) -> Result<QueueDepth, QueueClosed> {
    self.core.state.with_ref(QueueState::depth)
  }

  /// Closes the queue with no causes. Idempotent.
  pub fn close(&self) {
    self.close_with(core::iter::empty::<CloseCause>());
  }

  /// Closes the queue, interrupting every parked waiter with `causes` before returning.
  ///
  /// Buffered values and parked producers' undelivered payloads are discarded. After the first
  /// close the state never changes again; later calls are no-ops and the original causes
  /// stand.
  pub fn close_with<I>(&self, causes: I)
  where
    I: IntoIterator<Item = CloseCause>, {
    let causes: Vec<CloseCause> = causes.into_iter().collect();
    match self.core.state.update(|state| state.close(causes)) {
      | CloseTransition::AlreadyClosed => {},
      | CloseTransition::Interrupted { putters, takers, closed } => {
        for putter in putters {
          putter.interrupt(closed.clone());
        }
        for taker in takers {
          taker.interrupt(closed.clone());
        }
      },
    }
  }

  /// Returns whether the queue has been closed.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.core.state.with_ref(|state| matches!(state, QueueState::Closed { .. }))
  }
}

impl<T, TB> Clone for AsyncMpmcQueue<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  fn clone(&self) -> Self {
    Self { core: self.core.clone() }
  }
}

impl<T, TB> core::fmt::Debug for AsyncMpmcQueue<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("AsyncMpmcQueue").field("capacity", &self.core.capacity).finish()
  }
}
