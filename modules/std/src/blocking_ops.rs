use penstock_core_rs::collections::queue::{AsyncMpmcQueue, QueueClosed};

use crate::{blocking::block_on, toolbox::StdToolbox};


/// Blocking bridge for threads that are not running inside an async executor.
///
/// Each method parks the calling thread with the same semantics as the async operation it
/// wraps, including interruption by a concurrent close.
pub trait BlockingQueueOps<T> {
  /// Deposits one value, blocking the thread until a slot is free.
  ///
  /// # Errors
  ///
  /// Returns the close causes when the queue is closed before the value is accepted.
  fn offer_blocking(&self, item: T) -> Result<(), QueueClosed>;

  /// Deposits every value of `items` in order, blocking until all of them are accepted.
  ///
  /// # Errors
  ///
  /// Returns the close causes when the queue is closed before every value is accepted.
  fn offer_all_blocking<I>(&self, items: I) -> Result<(), QueueClosed>
  where
    I: IntoIterator<Item = T>;

  /// Withdraws the next value in arrival order, blocking the thread until one arrives.
  ///
  /// # Errors
  ///
  /// Returns the close causes when the queue is closed before a value arrives.
  fn poll_blocking(&self) -> Result<T, QueueClosed>;
}

impl<T> BlockingQueueOps<T> for AsyncMpmcQueue<T, StdToolbox>
where
  T: Send + 'static,
{
  fn offer_blocking(&self, item: T) -> Result<(), QueueClosed> {
    block_on(self.offer(item))
  }

  fn offer_all_blocking<I>(&self, items: I) -> Result<(), QueueClosed>
  where
    I: IntoIterator<Item = T>, {
    block_on(self.offer_all(items))
  }

  fn poll_blocking(&self) -> Result<T, QueueClosed> {
    block_on(self.poll())
  }
}
