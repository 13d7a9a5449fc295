use crate::sync::sync_mutex_like::SyncMutexLike;


/// Family of mutexes sharing one locking strategy.
///
/// A family is selected once per toolbox and stamped over every protected value the toolbox
/// hands out, so runtime-agnostic code never names a concrete lock type. Family mutexes are
/// required to be shareable across threads so that queue handles and their parked waiters can
/// move freely between tasks.
pub trait SyncMutexFamily {
  /// Concrete mutex type produced by this family.
  type Mutex<T>: SyncMutexLike<T> + Send + Sync
  where
    T: Send + 'static;

  /// Creates a family mutex wrapping the provided value.
  fn create<T>(value: T) -> Self::Mutex<T>
  where
    T: Send + 'static;
}

/// Mutex family handing out [`spin::Mutex`] locks, usable without the standard library.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpinMutexFamily;

impl SyncMutexFamily for SpinMutexFamily {
  type Mutex<T>
    = spin::Mutex<T>
  where
    T: Send + 'static;

  fn create<T>(value: T) -> Self::Mutex<T>
  where
    T: Send + 'static, {
    spin::Mutex::new(value)
  }
}
