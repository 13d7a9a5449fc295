use crate::sync::mutex_family::{SpinMutexFamily, SyncMutexFamily};

/// Bundle of runtime facilities shared by every type in this crate.
///
/// A toolbox names the mutex family used for internal locking, letting the same queue code run
/// on bare-metal spinlocks or on `std` mutexes without changing a line of the state machine.
pub trait RuntimeToolbox: 'static {
  /// Mutex family used for every lock this toolbox hands out.
  type MutexFamily: SyncMutexFamily;
}

/// Convenience alias resolving a toolbox to its concrete mutex type.
pub type ToolboxMutex<T, TB> = <<TB as RuntimeToolbox>::MutexFamily as SyncMutexFamily>::Mutex<T>;

/// Default toolbox for environments without the standard library, backed by spinlocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStdToolbox;

impl RuntimeToolbox for NoStdToolbox {
  type MutexFamily = SpinMutexFamily;
}
