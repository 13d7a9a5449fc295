#[cfg(not(feature = "force-portable-arc"))]
use alloc::sync::Arc;

#[cfg(feature = "force-portable-arc")]
pub use portable_atomic_util::Arc;


/// Shared wrapper backed by [`alloc::sync::Arc`] by default.
///
/// When the `force-portable-arc` feature is enabled it switches to [`portable_atomic_util::Arc`]
/// so that targets without native atomic pointer support still benefit from an `Arc`-compatible
/// shared handle.
///
/// Equality is pointer identity, which is what the queue's wait lists rely on to excise a
/// specific waiter.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }

  /// Attempts to unwrap the shared value, failing when other handles remain.
  ///
  /// # Errors
  ///
  /// Returns the handle unchanged when it is not the sole owner.
  pub fn try_unwrap(self) -> Result<T, Self> {
    Arc::try_unwrap(self.0).map_err(ArcShared)
  }
}

impl<T: ?Sized> core::ops::Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized + core::fmt::Debug> core::fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("ArcShared").field(&&self.0).finish()
  }
}

impl<T: ?Sized> PartialEq for ArcShared<T> {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl<T: ?Sized> Eq for ArcShared<T> {}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}
