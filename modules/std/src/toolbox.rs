use std::{
  ops::{Deref, DerefMut},
  sync::{Mutex, MutexGuard, PoisonError},
};

use penstock_core_rs::{
  collections::queue::AsyncMpmcQueue,
  sync::{RuntimeToolbox, SyncMutexFamily, SyncMutexLike},
};


/// Lock protecting a queue's swap cell and completion cells on hosted targets.
///
/// Poisoning is recovered from transparently: a panic while a queue's state is held never
/// wedges the other producers and consumers sharing it. Queue transitions replace the state
/// wholesale, so a recovered lock never exposes a half-edited value.
pub struct StdQueueMutex<T> {
  inner: Mutex<T>,
}

/// RAII guard returned by [`StdQueueMutex`].
pub struct StdQueueMutexGuard<'a, T>(MutexGuard<'a, T>);

impl<T> Deref for StdQueueMutexGuard<'_, T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T> DerefMut for StdQueueMutexGuard<'_, T> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl<T> SyncMutexLike<T> for StdQueueMutex<T> {
  type Guard<'a>
    = StdQueueMutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    Self { inner: Mutex::new(value) }
  }

  fn into_inner(self) -> T {
    self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
  }

  fn lock(&self) -> Self::Guard<'_> {
    StdQueueMutexGuard(self.inner.lock().unwrap_or_else(PoisonError::into_inner))
  }
}

/// Mutex family stamping [`StdQueueMutex`] over every lock a queue takes.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdMutexFamily;

impl SyncMutexFamily for StdMutexFamily {
  type Mutex<T>
    = StdQueueMutex<T>
  where
    T: Send + 'static;

  fn create<T>(value: T) -> Self::Mutex<T>
  where
    T: Send + 'static, {
    StdQueueMutex { inner: Mutex::new(value) }
  }
}

/// Toolbox for std environments, backed by [`StdMutexFamily`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StdToolbox;

impl RuntimeToolbox for StdToolbox {
  type MutexFamily = StdMutexFamily;
}

/// Queue alias locking with [`StdQueueMutex`] instead of the spinning default.
pub type StdMpmcQueue<T> = AsyncMpmcQueue<T, StdToolbox>;
