//! Mutex abstraction shared by every toolbox-driven lock in this crate.

use core::ops::{Deref, DerefMut};

/// Generic mutex abstraction for runtime-agnostic code.
pub trait SyncMutexLike<T> {
  /// Guard type returned by [`SyncMutexLike::lock`].
  type Guard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Creates a new mutex instance wrapping the provided value.
  fn new(value: T) -> Self;

  /// Consumes the mutex and returns the inner value.
  fn into_inner(self) -> T;

  /// Locks the mutex and returns a guard to the protected value.
  fn lock(&self) -> Self::Guard<'_>;
}

/// Binding for [`spin::Mutex`], the default lock where the standard library is unavailable.
/// Queue critical sections hold the lock only across a state replacement, never across a
/// suspension point.
impl<T> SyncMutexLike<T> for spin::Mutex<T> {
  type Guard<'a>
    = spin::MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    spin::Mutex::new(value)
  }

  fn into_inner(self) -> T {
    spin::Mutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    spin::Mutex::lock(self)
  }
}
