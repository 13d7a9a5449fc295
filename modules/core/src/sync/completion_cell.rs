use core::task::{Context, Poll, Waker};

use crate::sync::{
  arc_shared::ArcShared,
  mutex_family::SyncMutexFamily,
  runtime_toolbox::{NoStdToolbox, RuntimeToolbox, ToolboxMutex},
  sync_mutex_like::SyncMutexLike,
};


/// One-shot completion cell shared between a parked task and the party that will resume it.
///
/// The first call to [`complete`](Self::complete) or [`interrupt`](Self::interrupt) wins; later
/// writes are ignored and report that they lost the race. Reading happens through
/// [`poll`](Self::poll), which parks the caller's waker until a result arrives and then hands
/// the result out exactly once. A waiter that gives up calls [`abandon`](Self::abandon), after
/// which no write can succeed.
///
/// Cloning shares the same cell; equality is cell identity, so wait lists can excise a specific
/// waiter.
pub struct CompletionCell<V, E, TB: RuntimeToolbox = NoStdToolbox>
where
  V: Send + 'static,
  E: Send + 'static, {
  inner: ArcShared<ToolboxMutex<CellSlot<V, E>, TB>>,
}

// Write/read lifecycle of a cell. Idle holds the waker of the most recent poll.
enum CellSlot<V, E> {
  Idle { waker: Option<Waker> },
  Filled { result: Result<V, E> },
  Observed,
  Abandoned,
}

impl<V, E, TB> CompletionCell<V, E, TB>
where
  V: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  /// Creates an empty cell.
  #[must_use]
  pub fn new() -> Self {
    Self { inner: ArcShared::new(<TB::MutexFamily as SyncMutexFamily>::create(CellSlot::Idle { waker: None })) }
  }

  /// Fulfills the cell with `value`, waking the parked waiter.
  ///
  /// Returns whether this call won the write race.
  pub fn complete(&self, value: V) -> bool {
    self.fill(Ok(value))
  }

  /// Interrupts the cell with `error`, waking the parked waiter.
  ///
  /// Returns whether this call won the write race.
  pub fn interrupt(&self, error: E) -> bool {
    self.fill(Err(error))
  }

  fn fill(&self, result: Result<V, E>) -> bool {
    let mut slot = self.inner.lock();
    match &mut *slot {
      | CellSlot::Idle { waker } => {
        let parked = waker.take();
        *slot = CellSlot::Filled { result };
        drop(slot);
        if let Some(waker) = parked {
          waker.wake();
        }
        true
      },
      | CellSlot::Filled { .. } | CellSlot::Observed | CellSlot::Abandoned => false,
    }
  }

  /// Polls for the result, parking `cx`'s waker while the cell is empty.
  ///
  /// The result is handed out exactly once; polling again after it was taken parks forever.
  pub fn poll(&self, cx: &mut Context<'_>) -> Poll<Result<V, E>> {
    let mut slot = self.inner.lock();
    match &mut *slot {
      | CellSlot::Idle { waker } => {
        *waker = Some(cx.waker().clone());
        Poll::Pending
      },
      | CellSlot::Filled { .. } => match core::mem::replace(&mut *slot, CellSlot::Observed) {
        | CellSlot::Filled { result } => Poll::Ready(result),
        | _ => Poll::Pending,
      },
      | CellSlot::Observed | CellSlot::Abandoned => {
        debug_assert!(false, "completion cell polled after its result was taken");
        Poll::Pending
      },
    }
  }

  /// Marks the cell abandoned on behalf of a waiter that gave up.
  ///
  /// Returns `true` when no result had arrived yet, in which case the caller still owns the
  /// cleanup of any wait-list entry referencing this cell.
  pub fn abandon(&self) -> bool {
    let mut slot = self.inner.lock();
    match &*slot {
      | CellSlot::Idle { .. } => {
        *slot = CellSlot::Abandoned;
        true
      },
      | CellSlot::Filled { .. } | CellSlot::Observed | CellSlot::Abandoned => false,
    }
  }
}

impl<V, E, TB> Default for CompletionCell<V, E, TB>
where
  V: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<V, E, TB> Clone for CompletionCell<V, E, TB>
where
  V: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<V, E, TB> PartialEq for CompletionCell<V, E, TB>
where
  V: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn eq(&self, other: &Self) -> bool {
    self.inner == other.inner
  }
}

impl<V, E, TB> Eq for CompletionCell<V, E, TB>
where
  V: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
}

impl<V, E, TB> core::fmt::Debug for CompletionCell<V, E, TB>
where
  V: Send + 'static,
  E: Send + 'static,
  TB: RuntimeToolbox,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("CompletionCell").finish()
  }
}
