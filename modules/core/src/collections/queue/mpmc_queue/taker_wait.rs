use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::queue_core::QueueCore;
use crate::{
  collections::queue::{QueueClosed, TakerCell},
  sync::{ArcShared, RuntimeToolbox},
};

/// Future of a consumer parked in the wait list.
///
/// Dropping the future before it resolves runs the release half of the wait bracket: the cell
/// is abandoned and pruned from the state, so a cancelled consumer leaves nothing behind.
pub(crate) struct TakerWait<T, TB: RuntimeToolbox>
where
  T: Send + 'static, {
  core:     ArcShared<QueueCore<T, TB>>,
  cell:     TakerCell<T, TB>,
  finished: bool,
}

impl<T, TB> TakerWait<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  pub(crate) fn new(core: ArcShared<QueueCore<T, TB>>, cell: TakerCell<T, TB>) -> Self {
    Self { core, cell, finished: false }
  }
}

impl<T, TB> Future for TakerWait<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  type Output = Result<T, QueueClosed>;

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

impl<T, TB> Drop for TakerWait<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  fn drop(&mut self) {
    if self.finished {
      return;
    }
    if self.cell.abandon() {
      self.core.state.update(|state| state.release_taker(&self.cell));
    }
  }
}
