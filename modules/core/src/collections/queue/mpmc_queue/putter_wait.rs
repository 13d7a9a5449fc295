use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::queue_core::QueueCore;
use crate::{
  collections::queue::{PutterCell, QueueClosed},
  sync::{ArcShared, RuntimeToolbox},
};

/// Future of a producer parked with an unaccepted payload suffix.
///
/// Dropping the future before it resolves abandons the cell and prunes the producer from the
/// state, discarding the suffix. The prefix committed by the decision phase stays committed:
/// it was already visible and may have been taken.
pub(crate) struct PutterWait<T, TB: RuntimeToolbox>
where
  T: Send + 'static, {
  core:     ArcShared<QueueCore<T, TB>>,
  cell:     PutterCell<TB>,
  finished: bool,
}

impl<T, TB> PutterWait<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  pub(crate) fn new(core: ArcShared<QueueCore<T, TB>>, cell: PutterCell<TB>) -> Self {
    Self { core, cell, finished: false }
  }
}

impl<T, TB> Future for PutterWait<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  type Output = Result<(), QueueClosed>;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let this = self.get_mut();
    match this.cell.poll(cx) {
      | Poll::Ready(result) => {
        this.finished = true;
        Poll::Ready(result)
      },
      | Poll::Pending => Poll::Pending,
    }
  }
}

impl<T, TB> Drop for PutterWait<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  fn drop(&mut self) {
    if self.finished {
      return;
    }
    if self.cell.abandon() {
      self.core.state.update(|state| state.release_putter(&self.cell));
    }
  }
}
