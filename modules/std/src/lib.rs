#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unused_async)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
//! Standard-library bindings for the penstock queue toolkit.
//!
//! Supplies the `std::sync::Mutex`-backed queue lock, a thread-park blocking bridge, and the
//! [`StdMpmcQueue`] alias wiring both into the runtime-agnostic core.

mod blocking;
mod blocking_ops;
/// Runtime toolbox, queue lock, and aliases for std environments.
mod toolbox;

pub use blocking::block_on;
pub use blocking_ops::BlockingQueueOps;
pub use toolbox::{StdMpmcQueue, StdMutexFamily, StdQueueMutex, StdQueueMutexGuard, StdToolbox};
