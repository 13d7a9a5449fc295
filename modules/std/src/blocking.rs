use std::{
  future::Future,
  pin::pin,
  sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
  task::{Context, Poll, Wake, Waker},
};

#[cfg(test)]
mod tests;

// Wake-up channel between the polled future and the blocked thread.
enum SignalState {
  Empty,
  Waiting,
  Notified,
}

struct Signal {
  state: Mutex<SignalState>,
  cond:  Condvar,
}

impl Signal {
  fn new() -> Self {
    Self { state: Mutex::new(SignalState::Empty), cond: Condvar::new() }
  }

  fn lock_state(&self) -> MutexGuard<'_, SignalState> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  fn wait(&self) {
    let mut state = self.lock_state();
    match *state {
      | SignalState::Notified => *state = SignalState::Empty,
      | SignalState::Waiting => {
        debug_assert!(false, "only the blocked thread itself may wait on its signal");
      },
      | SignalState::Empty => {
        *state = SignalState::Waiting;
        while let SignalState::Waiting = *state {
          state = self.cond.wait(state).unwrap_or_else(PoisonError::into_inner);
        }
      },
    }
  }

  fn notify(&self) {
    let mut state = self.lock_state();
    match *state {
      | SignalState::Notified => {},
      | SignalState::Empty => *state = SignalState::Notified,
      | SignalState::Waiting => {
        *state = SignalState::Empty;
        self.cond.notify_one();
      },
    }
  }
}

impl Wake for Signal {
  fn wake(self: Arc<Self>) {
    self.notify();
  }

  fn wake_by_ref(self: &Arc<Self>) {
    self.notify();
  }
}

/// Drives `future` to completion on the calling thread, parking it between polls.
///
/// Intended for threads that are not running inside an async executor; do not call it from
/// async context, where parking the thread would stall the executor.
pub fn block_on<F: Future>(future: F) -> F::Output {
  let signal = Arc::new(Signal::new());
  let waker = Waker::from(signal.clone());
  let mut cx = Context::from_waker(&waker);
  let mut future = pin!(future);

  loop {
    match future.as_mut().poll(&mut cx) {
      | Poll::Ready(output) => return output,
      | Poll::Pending => signal.wait(),
    }
  }
}
