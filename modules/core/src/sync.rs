//! Synchronization primitives and shared-ownership abstractions.

mod arc_shared;
mod completion_cell;
mod mutex_family;
mod runtime_toolbox;
mod state_cell;
pub mod sync_mutex_like;

pub use arc_shared::ArcShared;
pub use completion_cell::CompletionCell;
pub use mutex_family::{SpinMutexFamily, SyncMutexFamily};
pub use runtime_toolbox::{NoStdToolbox, RuntimeToolbox, ToolboxMutex};
pub use state_cell::StateCell;
pub use sync_mutex_like::SyncMutexLike;
