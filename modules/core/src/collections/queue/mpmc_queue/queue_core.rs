use crate::{
  collections::queue::QueueState,
  sync::{NoStdToolbox, RuntimeToolbox, StateCell},
};

/// Shared heart of a queue: the swap-in-place state plus the fixed capacity.
pub(crate) struct QueueCore<T, TB: RuntimeToolbox = NoStdToolbox>
where
  T: Send + 'static, {
  pub(crate) state:    StateCell<QueueState<T, TB>, TB>,
  pub(crate) capacity: usize,
}

impl<T, TB> QueueCore<T, TB>
where
  T: Send + 'static,
  TB: RuntimeToolbox,
{
  pub(crate) fn new(capacity: usize) -> Self {
    Self { state: StateCell::new(QueueState::default()), capacity }
  }
}
