use crate::sync::{
  mutex_family::SyncMutexFamily,
  runtime_toolbox::{NoStdToolbox, RuntimeToolbox, ToolboxMutex},
  sync_mutex_like::SyncMutexLike,
};


/// Cell holding a state value that is replaced wholesale by each update.
///
/// [`update`](Self::update) applies a function to the current state, installs the replacement
/// the function returns, and hands back the companion value. Callers run any side effects on
/// the companion *after* the swap, so no side effect ever races with a later swap. The critical
/// section covers only the function application and never spans a suspension point.
pub struct StateCell<S, TB: RuntimeToolbox = NoStdToolbox>
where
  S: Send + 'static, {
  inner: ToolboxMutex<S, TB>,
}

impl<S, TB> StateCell<S, TB>
where
  S: Send + 'static,
  TB: RuntimeToolbox,
{
  /// Creates a cell seeded with the provided state.
  pub fn new(state: S) -> Self {
    Self { inner: <TB::MutexFamily as SyncMutexFamily>::create(state) }
  }

  /// Atomically replaces the state with `f`'s replacement and returns the companion value.
  pub fn update<R>(&self, f: impl FnOnce(S) -> (R, S)) -> R
  where
    S: Default, {
    let mut guard = self.inner.lock();
    let current = core::mem::take(&mut *guard);
    let (companion, next) = f(current);
    *guard = next;
    companion
  }

  /// Runs `f` with a shared reference to the current state.
  pub fn with_ref<R>(&self, f: impl FnOnce(&S) -> R) -> R {
    let guard = self.inner.lock();
    f(&guard)
  }
}
