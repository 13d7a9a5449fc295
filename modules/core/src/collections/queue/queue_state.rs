use alloc::{collections::VecDeque, vec::Vec};

use crate::{
  collections::queue::{
    CloseCause, CloseTransition, DrainTransition, OfferTransition, PendingPutter, PollTransition, PutterCell,
    QueueClosed, QueueDepth, TakerCell,
  },
  sync::{NoStdToolbox, RuntimeToolbox},
};

#[cfg(test)]
mod tests;

/// Closed sum of the queue's legal states.
///
/// Between any two swaps exactly one variant holds, and the wait lists of the two non-terminal
/// variants never coexist: parked producers imply a buffer that filled up, parked consumers
/// imply an empty buffer. Every transition method is pure: it consumes the current state and
/// returns the replacement together with a companion value describing the side effects to run
/// after the swap.
pub enum QueueState<T, TB: RuntimeToolbox = NoStdToolbox>
where
  T: Send + 'static, {
  /// Zero or more values are buffered; producers park here when their payload does not fit.
  Surplus {
    /// Buffered values in arrival order.
    buffer:  VecDeque<T>,
    /// Producers parked with the payload suffixes that did not fit, oldest first.
    putters: VecDeque<PendingPutter<T, TB>>,
  },
  /// The buffer is empty and consumers are parked, oldest first.
  Deficit {
    /// Parked consumers in arrival order.
    takers: VecDeque<TakerCell<T, TB>>,
  },
  /// Terminal. Records the causes handed to every waiter and every later operation.
  Closed {
    /// Causes supplied by the close call.
    causes: Vec<CloseCause>,
  },
}

impl<T, TB> QueueState<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  /// Deposits `items`, handing values to parked consumers first, then buffering up to
  /// `capacity`, then parking the caller with whatever suffix did not fit.
  pub fn offer(self, items: VecDeque<T>, capacity: usize) -> (OfferTransition<T, TB>, Self) {
    match self {
      | Self::Closed { causes } => {
        let rejected = OfferTransition::Rejected(QueueClosed::new(causes.clone()));
        (rejected, Self::Closed { causes })
      },
      | Self::Deficit { mut takers } => {
        let mut items = items;
        let mut handoffs = Vec::new();
        while !takers.is_empty() && !items.is_empty() {
          if let (Some(taker), Some(value)) = (takers.pop_front(), items.pop_front()) {
            handoffs.push((taker, value));
          }
        }
        if takers.is_empty() {
          Self::spill(handoffs, VecDeque::new(), VecDeque::new(), items, capacity)
        } else {
          (OfferTransition::Accepted { handoffs }, Self::Deficit { takers })
        }
      },
      | Self::Surplus { buffer, putters } => Self::spill(Vec::new(), buffer, putters, items, capacity),
    }
  }

  // Shared tail of the offer transition: fill the free room, park the rest.
  fn spill(
    handoffs: Vec<(TakerCell<T, TB>, T)>,
    mut buffer: VecDeque<T>,
    mut putters: VecDeque<PendingPutter<T, TB>>,
    mut items: VecDeque<T>,
    capacity: usize,
  ) -> (OfferTransition<T, TB>, Self) {
    while buffer.len() < capacity {
      match items.pop_front() {
        | Some(value) => buffer.push_back(value),
        | None => break,
      }
    }
    if items.is_empty() {
      (OfferTransition::Accepted { handoffs }, Self::Surplus { buffer, putters })
    } else {
      let waiter = PutterCell::<TB>::new();
      putters.push_back(PendingPutter::new(items, waiter.clone()));
      (OfferTransition::Parked { handoffs, waiter }, Self::Surplus { buffer, putters })
    }
  }

  /// Withdraws the next value in arrival order, or parks the caller when none is available.
  ///
  /// Removing the buffer head frees one slot, which is refilled from the oldest parked
  /// producer; a producer whose payload empties as a result is released.
  pub fn poll(self) -> (PollTransition<T, TB>, Self) {
    match self {
      | Self::Closed { causes } => {
        let rejected = PollTransition::Rejected(QueueClosed::new(causes.clone()));
        (rejected, Self::Closed { causes })
      },
      | Self::Deficit { mut takers } => {
        let waiter = TakerCell::<T, TB>::new();
        takers.push_back(waiter.clone());
        (PollTransition::Parked { waiter }, Self::Deficit { takers })
      },
      | Self::Surplus { mut buffer, mut putters } => {
        if let Some(value) = buffer.pop_front() {
          let released = Self::promote_next(&mut buffer, &mut putters);
          return (PollTransition::Delivered { value, released }, Self::Surplus { buffer, putters });
        }
        while let Some(mut putter) = putters.pop_front() {
          let Some(value) = putter.pop_next() else {
            debug_assert!(false, "parked producers never carry an empty payload");
            continue;
          };
          let released = if putter.is_exhausted() {
            Some(putter.into_done())
          } else {
            putters.push_front(putter);
            None
          };
          return (PollTransition::Delivered { value, released }, Self::Surplus { buffer, putters });
        }
        let waiter = TakerCell::<T, TB>::new();
        let mut takers = VecDeque::new();
        takers.push_back(waiter.clone());
        (PollTransition::Parked { waiter }, Self::Deficit { takers })
      },
    }
  }

  // Moves one value from the oldest parked producer into the buffer slot a poll just freed.
  fn promote_next(
    buffer: &mut VecDeque<T>,
    putters: &mut VecDeque<PendingPutter<T, TB>>,
  ) -> Option<PutterCell<TB>> {
    let mut putter = putters.pop_front()?;
    let value = putter.pop_next()?;
    buffer.push_back(value);
    if putter.is_exhausted() {
      Some(putter.into_done())
    } else {
      putters.push_front(putter);
      None
    }
  }

  /// Withdraws the whole buffer at once. Parked producers stay parked.
  pub fn drain_all(self) -> (DrainTransition<T>, Self) {
    match self {
      | Self::Closed { causes } => {
        let rejected = DrainTransition::Rejected(QueueClosed::new(causes.clone()));
        (rejected, Self::Closed { causes })
      },
      | Self::Deficit { takers } => (DrainTransition::Drained(Vec::new()), Self::Deficit { takers }),
      | Self::Surplus { buffer, putters } => {
        let drained = buffer.into_iter().collect();
        (DrainTransition::Drained(drained), Self::Surplus { buffer: VecDeque::new(), putters })
      },
    }
  }

  /// Withdraws at most `max` buffered values. Parked producers stay parked.
  pub fn drain_up_to(self, max: usize) -> (DrainTransition<T>, Self) {
    match self {
      | Self::Closed { causes } => {
        let rejected = DrainTransition::Rejected(QueueClosed::new(causes.clone()));
        (rejected, Self::Closed { causes })
      },
      | Self::Deficit { takers } => (DrainTransition::Drained(Vec::new()), Self::Deficit { takers }),
      | Self::Surplus { mut buffer, putters } => {
        let count = max.min(buffer.len());
        let drained = buffer.drain(..count).collect();
        (DrainTransition::Drained(drained), Self::Surplus { buffer, putters })
      },
    }
  }

  /// Transitions to the terminal state, collecting every parked waiter for interruption.
  ///
  /// Buffered values and the undelivered payloads of parked producers are discarded. A second
  /// close leaves the original causes in place.
  pub fn close(self, causes: Vec<CloseCause>) -> (CloseTransition<T, TB>, Self) {
    match self {
      | Self::Closed { causes: original } => (CloseTransition::AlreadyClosed, Self::Closed { causes: original }),
      | Self::Surplus { putters, .. } => {
        let closed = QueueClosed::new(causes.clone());
        let putters = putters.into_iter().map(PendingPutter::into_done).collect();
        (CloseTransition::Interrupted { putters, takers: Vec::new(), closed }, Self::Closed { causes })
      },
      | Self::Deficit { takers } => {
        let closed = QueueClosed::new(causes.clone());
        let takers = takers.into_iter().collect();
        (CloseTransition::Interrupted { putters: Vec::new(), takers, closed }, Self::Closed { causes })
      },
    }
  }

  /// Excises a cancelled producer, discarding its undelivered payload. No-op in other states.
  pub fn release_putter(self, cell: &PutterCell<TB>) -> (bool, Self) {
    match self {
      | Self::Surplus { buffer, mut putters } => {
        let before = putters.len();
        putters.retain(|putter| putter.done() != cell);
        (putters.len() != before, Self::Surplus { buffer, putters })
      },
      | other => (false, other),
    }
  }

  /// Excises a cancelled consumer. No-op in other states.
  pub fn release_taker(self, cell: &TakerCell<T, TB>) -> (bool, Self) {
    match self {
      | Self::Deficit { mut takers } => {
        let before = takers.len();
        takers.retain(|taker| taker != cell);
        let removed = takers.len() != before;
        if takers.is_empty() {
          (removed, Self::Surplus { buffer: VecDeque::new(), putters: VecDeque::new() })
        } else {
          (removed, Self::Deficit { takers })
        }
      },
      | other => (false, other),
    }
  }

  /// Reports the fill level: values owed to consumers, or consumers parked with nothing to take.
  ///
  /// # Errors
  ///
  /// Returns the stored causes when the queue is closed.
  pub fn depth(&self) -> Result<QueueDepth, QueueClosed> {
    match self {
      | Self::Surplus { buffer, putters } => {
        let owed: usize = putters.iter().map(PendingPutter::remaining_len).sum();
        Ok(QueueDepth::Stored(buffer.len() + owed))
      },
      | Self::Deficit { takers } => Ok(QueueDepth::Awaited(takers.len())),
      | Self::Closed { causes } => Err(QueueClosed::new(causes.clone())),
    }
  }
}

impl<T, TB> Default for QueueState<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  /// The state every queue starts in: an empty buffer with no waiters.
  fn default() -> Self {
    Self::Surplus { buffer: VecDeque::new(), putters: VecDeque::new() }
  }
}
