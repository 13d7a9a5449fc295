//! Asynchronous bounded MPMC queue built on a swap-in-place state machine.
//!
//! The queue's whole life is a sequence of atomic state replacements. Each public operation
//! computes its transition as a pure function of the current state, installs the replacement,
//! and only then completes or interrupts the completion cells the transition removed from the
//! wait lists. Cancellation is the mirror image: a parked waiter dropped before resolving
//! abandons its cell and prunes it from whichever wait list still holds it.

use crate::sync::{CompletionCell, NoStdToolbox};

mod close_cause;
mod close_transition;
mod drain_transition;
mod mpmc_queue;
mod offer_transition;
mod pending_putter;
mod poll_transition;
mod queue_closed;
mod queue_depth;
mod queue_state;

pub use close_cause::CloseCause;
pub use close_transition::CloseTransition;
pub use drain_transition::DrainTransition;
pub use mpmc_queue::AsyncMpmcQueue;
pub use offer_transition::OfferTransition;
pub use pending_putter::PendingPutter;
pub use poll_transition::PollTransition;
pub use queue_closed::QueueClosed;
pub use queue_depth::QueueDepth;
pub use queue_state::QueueState;

/// Completion cell resumed with the value handed to a parked consumer.
pub type TakerCell<T, TB = NoStdToolbox> = CompletionCell<T, QueueClosed, TB>;

/// Completion cell resumed once a parked producer's payload is fully accepted.
pub type PutterCell<TB = NoStdToolbox> = CompletionCell<(), QueueClosed, TB>;
