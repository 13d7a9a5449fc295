#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
//! Facade crate for the penstock queue toolkit.
//!
//! Re-exports the asynchronous bounded MPMC queue from `penstock-core-rs` together with the
//! std bindings from `penstock-std-rs`, so most users depend on this crate alone.

pub use penstock_core_rs::{
  collections::queue::{AsyncMpmcQueue, CloseCause, QueueClosed, QueueDepth},
  sync::{NoStdToolbox, RuntimeToolbox},
};
pub use penstock_std_rs::{BlockingQueueOps, StdMpmcQueue, StdToolbox, block_on};


/// Returns the semantic version of the crate.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
