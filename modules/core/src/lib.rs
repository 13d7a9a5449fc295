#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unused_async)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::needless_borrow)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
//! Core of the penstock queue toolkit.
//!
//! Provides the runtime-agnostic state machine of an asynchronous, bounded, many-producer /
//! many-consumer FIFO queue, plus the synchronization primitives it is built from. Everything
//! here runs without the standard library; runtime crates only supply a mutex family through
//! the [`sync::RuntimeToolbox`] abstraction.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod collections;
pub mod sync;

pub use collections::queue::{AsyncMpmcQueue, CloseCause, QueueClosed, QueueDepth};
pub use sync::{ArcShared, CompletionCell, NoStdToolbox, RuntimeToolbox, StateCell};
