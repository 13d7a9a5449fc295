use std::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
  thread,
  time::Duration,
};

use super::block_on;
use crate::toolbox::StdMpmcQueue;

#[test]
fn block_on_returns_a_ready_value() {
  assert_eq!(block_on(async { 40 + 2 }), 42);
}

// Future that stays pending until another thread wakes it.
struct WakeAfter {
  polled: bool,
}

impl Future for WakeAfter {
  type Output = ();

  fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    if self.polled {
      return Poll::Ready(());
    }
    self.polled = true;
    let waker = cx.waker().clone();
    thread::spawn(move || {
      thread::sleep(Duration::from_millis(10));
      waker.wake();
    });
    Poll::Pending
  }
}

#[test]
fn block_on_parks_until_woken_from_another_thread() {
  block_on(WakeAfter { polled: false });
}

#[test]
fn block_on_drives_a_queue_handoff() {
  let queue: StdMpmcQueue<i32> = StdMpmcQueue::bounded(1);
  let producer = {
    let queue = queue.clone();
    thread::spawn(move || {
      for value in [1, 2, 3] {
        block_on(queue.offer(value)).unwrap();
      }
    })
  };

  let mut taken = Vec::new();
  for _ in 0..3 {
    taken.push(block_on(queue.poll()).unwrap());
  }
  producer.join().unwrap();
  assert_eq!(taken, vec![1, 2, 3]);
}
