use alloc::{collections::VecDeque, vec, vec::Vec};

use super::QueueState;
use crate::{
  collections::queue::{
    CloseCause, CloseTransition, DrainTransition, OfferTransition, PendingPutter, PollTransition, PutterCell,
    QueueDepth, TakerCell,
  },
  sync::NoStdToolbox,
};

type State = QueueState<i32, NoStdToolbox>;
type Taker = TakerCell<i32, NoStdToolbox>;
type Putter = PutterCell<NoStdToolbox>;

fn surplus(buffer: Vec<i32>, putters: Vec<PendingPutter<i32, NoStdToolbox>>) -> State {
  QueueState::Surplus { buffer: buffer.into_iter().collect(), putters: putters.into_iter().collect() }
}

fn deficit(takers: Vec<Taker>) -> State {
  QueueState::Deficit { takers: takers.into_iter().collect() }
}

fn parked(values: Vec<i32>) -> (PendingPutter<i32, NoStdToolbox>, Putter) {
  let cell = Putter::new();
  (PendingPutter::new(values.into_iter().collect(), cell.clone()), cell)
}

fn buffer_of(state: &State) -> Vec<i32> {
  match state {
    | QueueState::Surplus { buffer, .. } => buffer.iter().copied().collect(),
    | _ => panic!("expected surplus state"),
  }
}

#[test]
fn offer_into_empty_buffer_accepts_everything() {
  let state = State::default();
  let (transition, next) = state.offer(VecDeque::from([1, 2]), 4);
  match transition {
    | OfferTransition::Accepted { handoffs } => assert!(handoffs.is_empty()),
    | _ => panic!("expected accepted"),
  }
  assert_eq!(buffer_of(&next), vec![1, 2]);
}

#[test]
fn offer_overflow_parks_the_suffix_only() {
  let state = State::default();
  let (transition, next) = state.offer(VecDeque::from([1, 2, 3, 4, 5]), 3);
  let waiter = match transition {
    | OfferTransition::Parked { handoffs, waiter } => {
      assert!(handoffs.is_empty());
      waiter
    },
    | _ => panic!("expected parked"),
  };
  assert_eq!(buffer_of(&next), vec![1, 2, 3]);
  match &next {
    | QueueState::Surplus { putters, .. } => {
      assert_eq!(putters.len(), 1);
      assert_eq!(putters[0].remaining_len(), 2);
      assert_eq!(*putters[0].done(), waiter);
    },
    | _ => panic!("expected surplus state"),
  }
}

#[test]
fn offer_when_full_parks_the_whole_payload() {
  let state = surplus(vec![1, 2], vec![]);
  let (transition, next) = state.offer(VecDeque::from([3, 4]), 2);
  assert!(matches!(transition, OfferTransition::Parked { .. }));
  match &next {
    | QueueState::Surplus { buffer, putters } => {
      assert_eq!(buffer.len(), 2);
      assert_eq!(putters[0].remaining_len(), 2);
    },
    | _ => panic!("expected surplus state"),
  }
}

#[test]
fn offer_queues_behind_earlier_parked_producers() {
  let (first, first_cell) = parked(vec![9]);
  let state = surplus(vec![1, 2], vec![first]);
  let (transition, next) = state.offer(VecDeque::from([3]), 2);
  assert!(matches!(transition, OfferTransition::Parked { .. }));
  match &next {
    | QueueState::Surplus { putters, .. } => {
      assert_eq!(putters.len(), 2);
      assert_eq!(*putters[0].done(), first_cell);
    },
    | _ => panic!("expected surplus state"),
  }
}

#[test]
fn offer_hands_values_to_parked_consumers_in_order() {
  let first = Taker::new();
  let second = Taker::new();
  let state = deficit(vec![first.clone(), second.clone()]);
  let (transition, next) = state.offer(VecDeque::from([10, 20, 30]), 2);
  match transition {
    | OfferTransition::Accepted { handoffs } => {
      assert_eq!(handoffs.len(), 2);
      assert_eq!(handoffs[0].0, first);
      assert_eq!(handoffs[0].1, 10);
      assert_eq!(handoffs[1].0, second);
      assert_eq!(handoffs[1].1, 20);
    },
    | _ => panic!("expected accepted"),
  }
  assert_eq!(buffer_of(&next), vec![30]);
}

#[test]
fn offer_absorbed_by_consumers_leaves_the_rest_waiting() {
  let first = Taker::new();
  let second = Taker::new();
  let third = Taker::new();
  let state = deficit(vec![first.clone(), second.clone(), third.clone()]);
  let (transition, next) = state.offer(VecDeque::from([1]), 2);
  match transition {
    | OfferTransition::Accepted { handoffs } => {
      assert_eq!(handoffs.len(), 1);
      assert_eq!(handoffs[0].0, first);
    },
    | _ => panic!("expected accepted"),
  }
  match &next {
    | QueueState::Deficit { takers } => {
      assert_eq!(takers.len(), 2);
      assert_eq!(takers[0], second);
      assert_eq!(takers[1], third);
    },
    | _ => panic!("expected deficit state"),
  }
}

#[test]
fn offer_past_consumers_parks_the_overflow() {
  let taker = Taker::new();
  let state = deficit(vec![taker.clone()]);
  let (transition, next) = state.offer(VecDeque::from([1, 2, 3, 4]), 2);
  match transition {
    | OfferTransition::Parked { handoffs, .. } => {
      assert_eq!(handoffs.len(), 1);
      assert_eq!(handoffs[0].1, 1);
    },
    | _ => panic!("expected parked"),
  }
  assert_eq!(buffer_of(&next), vec![2, 3]);
  match &next {
    | QueueState::Surplus { putters, .. } => assert_eq!(putters[0].remaining_len(), 1),
    | _ => panic!("expected surplus state"),
  }
}

#[test]
fn offer_of_nothing_completes_immediately() {
  let taker = Taker::new();
  let state = deficit(vec![taker.clone()]);
  let (transition, next) = state.offer(VecDeque::new(), 2);
  match transition {
    | OfferTransition::Accepted { handoffs } => assert!(handoffs.is_empty()),
    | _ => panic!("expected accepted"),
  }
  assert!(matches!(next, QueueState::Deficit { ref takers } if takers.len() == 1));
}

#[test]
fn offer_on_closed_reports_the_causes() {
  let state: State = QueueState::Closed { causes: vec![CloseCause::new("done")] };
  let (transition, next) = state.offer(VecDeque::from([1]), 2);
  match transition {
    | OfferTransition::Rejected(closed) => assert_eq!(closed.causes(), &[CloseCause::new("done")]),
    | _ => panic!("expected rejected"),
  }
  assert!(matches!(next, QueueState::Closed { .. }));
}

#[test]
fn poll_pops_the_head_and_promotes_a_parked_value() {
  let (putter, cell) = parked(vec![3]);
  let state = surplus(vec![1, 2], vec![putter]);
  let (transition, next) = state.poll();
  match transition {
    | PollTransition::Delivered { value, released } => {
      assert_eq!(value, 1);
      assert_eq!(released, Some(cell));
    },
    | _ => panic!("expected delivered"),
  }
  assert_eq!(buffer_of(&next), vec![2, 3]);
  match &next {
    | QueueState::Surplus { putters, .. } => assert!(putters.is_empty()),
    | _ => panic!("expected surplus state"),
  }
}

#[test]
fn poll_promotes_one_value_per_call() {
  let (putter, _cell) = parked(vec![3, 4]);
  let state = surplus(vec![1, 2], vec![putter]);
  let (transition, next) = state.poll();
  match transition {
    | PollTransition::Delivered { value, released } => {
      assert_eq!(value, 1);
      assert!(released.is_none());
    },
    | _ => panic!("expected delivered"),
  }
  assert_eq!(buffer_of(&next), vec![2, 3]);
  match &next {
    | QueueState::Surplus { putters, .. } => assert_eq!(putters[0].remaining_len(), 1),
    | _ => panic!("expected surplus state"),
  }
}

#[test]
fn poll_serves_directly_from_a_parked_producer() {
  let (putter, cell) = parked(vec![7]);
  let state = surplus(vec![], vec![putter]);
  let (transition, next) = state.poll();
  match transition {
    | PollTransition::Delivered { value, released } => {
      assert_eq!(value, 7);
      assert_eq!(released, Some(cell));
    },
    | _ => panic!("expected delivered"),
  }
  assert!(buffer_of(&next).is_empty());
}

#[test]
fn poll_shortens_a_longer_parked_payload() {
  let (putter, _cell) = parked(vec![7, 8]);
  let state = surplus(vec![], vec![putter]);
  let (transition, next) = state.poll();
  match transition {
    | PollTransition::Delivered { value, released } => {
      assert_eq!(value, 7);
      assert!(released.is_none());
    },
    | _ => panic!("expected delivered"),
  }
  match &next {
    | QueueState::Surplus { putters, .. } => assert_eq!(putters[0].remaining_len(), 1),
    | _ => panic!("expected surplus state"),
  }
}

#[test]
fn poll_parks_on_an_empty_queue() {
  let state = State::default();
  let (transition, next) = state.poll();
  let waiter = match transition {
    | PollTransition::Parked { waiter } => waiter,
    | _ => panic!("expected parked"),
  };
  match &next {
    | QueueState::Deficit { takers } => {
      assert_eq!(takers.len(), 1);
      assert_eq!(takers[0], waiter);
    },
    | _ => panic!("expected deficit state"),
  }
}

#[test]
fn poll_parks_behind_earlier_consumers() {
  let first = Taker::new();
  let state = deficit(vec![first.clone()]);
  let (transition, next) = state.poll();
  let waiter = match transition {
    | PollTransition::Parked { waiter } => waiter,
    | _ => panic!("expected parked"),
  };
  match &next {
    | QueueState::Deficit { takers } => {
      assert_eq!(takers[0], first);
      assert_eq!(takers[1], waiter);
    },
    | _ => panic!("expected deficit state"),
  }
}

#[test]
fn poll_on_closed_reports_the_causes() {
  let state: State = QueueState::Closed { causes: vec![] };
  let (transition, _next) = state.poll();
  assert!(matches!(transition, PollTransition::Rejected(_)));
}

#[test]
fn drain_all_empties_the_buffer_and_keeps_producers_parked() {
  let (putter, _cell) = parked(vec![9]);
  let state = surplus(vec![1, 2, 3], vec![putter]);
  let (transition, next) = state.drain_all();
  match transition {
    | DrainTransition::Drained(values) => assert_eq!(values, vec![1, 2, 3]),
    | _ => panic!("expected drained"),
  }
  assert!(buffer_of(&next).is_empty());
  match &next {
    | QueueState::Surplus { putters, .. } => assert_eq!(putters.len(), 1),
    | _ => panic!("expected surplus state"),
  }
}

#[test]
fn drain_all_on_waiting_consumers_returns_nothing() {
  let state = deficit(vec![Taker::new()]);
  let (transition, next) = state.drain_all();
  match transition {
    | DrainTransition::Drained(values) => assert!(values.is_empty()),
    | _ => panic!("expected drained"),
  }
  assert!(matches!(next, QueueState::Deficit { ref takers } if takers.len() == 1));
}

#[test]
fn drain_up_to_takes_a_prefix() {
  let state = surplus(vec![1, 2, 3], vec![]);
  let (transition, next) = state.drain_up_to(2);
  match transition {
    | DrainTransition::Drained(values) => assert_eq!(values, vec![1, 2]),
    | _ => panic!("expected drained"),
  }
  assert_eq!(buffer_of(&next), vec![3]);
}

#[test]
fn drain_up_to_zero_changes_nothing() {
  let state = surplus(vec![1, 2], vec![]);
  let (transition, next) = state.drain_up_to(0);
  match transition {
    | DrainTransition::Drained(values) => assert!(values.is_empty()),
    | _ => panic!("expected drained"),
  }
  assert_eq!(buffer_of(&next), vec![1, 2]);
}

#[test]
fn drain_up_to_past_the_end_takes_everything() {
  let state = surplus(vec![1], vec![]);
  let (transition, _next) = state.drain_up_to(10);
  match transition {
    | DrainTransition::Drained(values) => assert_eq!(values, vec![1]),
    | _ => panic!("expected drained"),
  }
}

#[test]
fn close_collects_parked_producers_for_interruption() {
  let (putter, cell) = parked(vec![5, 6]);
  let state = surplus(vec![1], vec![putter]);
  let (transition, next) = state.close(vec![CloseCause::new("halt")]);
  match transition {
    | CloseTransition::Interrupted { putters, takers, closed } => {
      assert_eq!(putters, vec![cell]);
      assert!(takers.is_empty());
      assert_eq!(closed.causes(), &[CloseCause::new("halt")]);
    },
    | _ => panic!("expected interrupted"),
  }
  assert!(matches!(next, QueueState::Closed { .. }));
}

#[test]
fn close_collects_parked_consumers_for_interruption() {
  let taker = Taker::new();
  let state = deficit(vec![taker.clone()]);
  let (transition, _next) = state.close(vec![]);
  match transition {
    | CloseTransition::Interrupted { putters, takers, closed } => {
      assert!(putters.is_empty());
      assert_eq!(takers, vec![taker]);
      assert!(closed.causes().is_empty());
    },
    | _ => panic!("expected interrupted"),
  }
}

#[test]
fn close_is_idempotent_and_keeps_the_first_causes() {
  let state = State::default();
  let (_transition, closed_state) = state.close(vec![CloseCause::new("first")]);
  let (transition, final_state) = closed_state.close(vec![CloseCause::new("second")]);
  assert!(matches!(transition, CloseTransition::AlreadyClosed));
  match &final_state {
    | QueueState::Closed { causes } => assert_eq!(causes.as_slice(), &[CloseCause::new("first")]),
    | _ => panic!("expected closed state"),
  }
}

#[test]
fn release_taker_excises_exactly_the_given_cell() {
  let first = Taker::new();
  let second = Taker::new();
  let state = deficit(vec![first.clone(), second.clone()]);
  let (removed, next) = state.release_taker(&first);
  assert!(removed);
  match &next {
    | QueueState::Deficit { takers } => {
      assert_eq!(takers.len(), 1);
      assert_eq!(takers[0], second);
    },
    | _ => panic!("expected deficit state"),
  }
}

#[test]
fn release_last_taker_returns_to_an_empty_surplus() {
  let taker = Taker::new();
  let state = deficit(vec![taker.clone()]);
  let (removed, next) = state.release_taker(&taker);
  assert!(removed);
  assert_eq!(next.depth(), Ok(QueueDepth::Stored(0)));
}

#[test]
fn release_taker_on_closed_is_a_no_op() {
  let taker = Taker::new();
  let state: State = QueueState::Closed { causes: vec![] };
  let (removed, next) = state.release_taker(&taker);
  assert!(!removed);
  assert!(matches!(next, QueueState::Closed { .. }));
}

#[test]
fn release_putter_discards_its_residual_payload() {
  let (first, first_cell) = parked(vec![5, 6]);
  let (second, _second_cell) = parked(vec![7]);
  let state = surplus(vec![1, 2], vec![first, second]);
  let (removed, next) = state.release_putter(&first_cell);
  assert!(removed);
  match &next {
    | QueueState::Surplus { putters, .. } => {
      assert_eq!(putters.len(), 1);
      assert_eq!(putters[0].remaining_len(), 1);
    },
    | _ => panic!("expected surplus state"),
  }
  assert_eq!(next.depth(), Ok(QueueDepth::Stored(3)));
}

#[test]
fn release_putter_with_unknown_cell_changes_nothing() {
  let (putter, _cell) = parked(vec![5]);
  let state = surplus(vec![1], vec![putter]);
  let stranger = Putter::new();
  let (removed, next) = state.release_putter(&stranger);
  assert!(!removed);
  assert_eq!(next.depth(), Ok(QueueDepth::Stored(2)));
}

#[test]
fn depth_counts_buffered_and_owed_values() {
  let (putter, _cell) = parked(vec![5, 6, 7]);
  let state = surplus(vec![1, 2], vec![putter]);
  assert_eq!(state.depth(), Ok(QueueDepth::Stored(5)));
}

#[test]
fn depth_counts_parked_consumers_negatively() {
  let state = deficit(vec![Taker::new(), Taker::new()]);
  assert_eq!(state.depth(), Ok(QueueDepth::Awaited(2)));
  assert_eq!(state.depth().map(QueueDepth::to_isize), Ok(-2));
}

#[test]
fn depth_on_closed_reports_the_causes() {
  let state: State = QueueState::Closed { causes: vec![CloseCause::new("gone")] };
  let result = state.depth();
  assert!(result.is_err());
}
