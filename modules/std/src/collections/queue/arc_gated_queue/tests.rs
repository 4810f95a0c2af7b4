use std::thread;

use super::*;

const QUEUE_CAPACITY: usize = 500;

#[test]
fn gated_queue_offer_until_locked() {
  let queue = ArcGatedQueue::new(QUEUE_CAPACITY);
  queue.offer(1).unwrap();

  queue.lock();
  assert_eq!(queue.offer(2), Err(OfferError::Locked(2)));
}

#[test]
fn gated_queue_offer_increments_len() {
  let queue = ArcGatedQueue::new(QUEUE_CAPACITY);
  queue.offer(1).unwrap();
  assert_eq!(queue.len(), 1);

  queue.offer(5).unwrap();
  assert_eq!(queue.len(), 2);
}

#[test]
fn gated_queue_offer_at_full_capacity() {
  let total = 5;
  let queue = ArcGatedQueue::new(total);

  for value in 0..total {
    queue.offer(value).unwrap();
  }

  assert_eq!(queue.offer(0), Err(OfferError::Full(0)));
  assert_eq!(queue.len(), total);
  assert_eq!(queue.capacity(), total);
}

#[test]
fn gated_queue_concurrent_offers_keep_every_element() {
  let total = QUEUE_CAPACITY;
  let queue = ArcGatedQueue::new(total);

  thread::scope(|scope| {
    for value in 0..total {
      let q = queue.clone();
      scope.spawn(move || {
        q.offer(value).unwrap();
      });
    }
  });

  assert_eq!(queue.len(), total);

  let mut seen = vec![false; total];
  for _ in 0..total {
    let value = queue.poll().unwrap();
    assert!(!seen[value], "duplicated element: {value}");
    seen[value] = true;
  }
  assert!(seen.iter().all(|present| *present), "enqueued elements are missing");
}

#[test]
fn gated_queue_len_under_concurrent_readers() {
  let readers = 100;
  let stored = 10;
  let queue = ArcGatedQueue::new(QUEUE_CAPACITY);

  for value in 0..stored {
    queue.offer(value).unwrap();
  }

  thread::scope(|scope| {
    for _ in 0..readers {
      let q = queue.clone();
      scope.spawn(move || {
        assert_eq!(q.len(), stored);
      });
    }
  });
}

#[test]
fn gated_queue_capacity_reports_construction_value() {
  let queue = ArcGatedQueue::<u32>::new(QUEUE_CAPACITY);
  assert_eq!(queue.capacity(), QUEUE_CAPACITY);

  let queue = ArcGatedQueue::<u32>::new(10);
  assert_eq!(queue.capacity(), 10);
}

#[test]
fn gated_queue_poll_until_locked() {
  let queue = ArcGatedQueue::new(QUEUE_CAPACITY);
  queue.offer(1).unwrap();
  queue.poll().unwrap();

  queue.offer(1).unwrap();
  queue.lock();
  assert_eq!(queue.poll(), Err(PollError::Locked));
}

#[test]
fn gated_queue_poll_empty_queue() {
  let queue = ArcGatedQueue::<u32>::new(QUEUE_CAPACITY);
  assert_eq!(queue.poll(), Err(PollError::Empty));
}

#[test]
fn gated_queue_poll_preserves_fifo_order() {
  let queue = ArcGatedQueue::new(QUEUE_CAPACITY);
  queue.offer('a').unwrap();
  queue.offer('b').unwrap();
  queue.offer('c').unwrap();

  assert_eq!(queue.poll(), Ok('a'));
  assert_eq!(queue.len(), 2);
  assert_eq!(queue.poll(), Ok('b'));
  assert_eq!(queue.len(), 1);
  assert_eq!(queue.poll(), Ok('c'));
  assert_eq!(queue.len(), 0);
}

#[test]
fn gated_queue_concurrent_polls_drain_distinct_elements() {
  let to_offer = 100_usize;
  let to_poll = 90_usize;
  let queue = ArcGatedQueue::new(QUEUE_CAPACITY);

  for value in 0..to_offer {
    queue.offer(value).unwrap();
  }

  thread::scope(|scope| {
    for _ in 0..to_poll {
      let q = queue.clone();
      scope.spawn(move || {
        q.poll().unwrap();
      });
    }
  });

  assert_eq!(queue.len(), to_offer - to_poll);
  assert_eq!(queue.poll(), Ok(to_poll));
}

#[test]
fn gated_queue_lock_is_idempotent() {
  let queue = ArcGatedQueue::<u32>::new(QUEUE_CAPACITY);
  for _ in 0..5 {
    queue.lock();
  }
  assert!(queue.is_locked());
}

#[test]
fn gated_queue_unlock_is_idempotent() {
  let queue = ArcGatedQueue::<u32>::new(QUEUE_CAPACITY);
  queue.lock();
  queue.unlock();
  assert!(!queue.is_locked());

  queue.unlock();
  assert!(!queue.is_locked());
}

#[test]
fn gated_queue_unlock_restores_both_directions() {
  let queue = ArcGatedQueue::new(QUEUE_CAPACITY);
  queue.offer(1).unwrap();
  queue.lock();
  assert_eq!(queue.offer(2), Err(OfferError::Locked(2)));
  assert_eq!(queue.poll(), Err(PollError::Locked));

  queue.unlock();
  queue.offer(2).unwrap();
  assert_eq!(queue.poll(), Ok(1));
  assert_eq!(queue.poll(), Ok(2));
}

#[test]
fn gated_queue_close_dominates_lock() {
  let queue = ArcGatedQueue::new(QUEUE_CAPACITY);
  queue.offer(1).unwrap();
  queue.lock();
  queue.close();

  assert_eq!(queue.offer(2), Err(OfferError::Closed(2)));
  assert_eq!(queue.poll(), Err(PollError::Closed));

  // a transient quiesce flag must not mask teardown
  queue.unlock();
  assert_eq!(queue.poll(), Err(PollError::Closed));
}

#[test]
fn gated_queue_close_is_terminal_and_idempotent() {
  let queue = ArcGatedQueue::new(QUEUE_CAPACITY);
  queue.offer(7).unwrap();
  queue.close();
  queue.close();

  assert!(queue.is_closed());
  assert_eq!(queue.offer(8), Err(OfferError::Closed(8)));
  assert_eq!(queue.poll(), Err(PollError::Closed));
  assert_eq!(queue.len(), 1);
  assert_eq!(queue.capacity(), QUEUE_CAPACITY);
}

#[test]
fn gated_queue_clone_observes_state() {
  let queue = ArcGatedQueue::new(4);
  let cloned = queue.clone();

  queue.offer(10).unwrap();
  queue.offer(11).unwrap();

  assert_eq!(cloned.len(), 2);
  assert_eq!(cloned.poll(), Ok(10));
  assert_eq!(queue.poll(), Ok(11));
  assert_eq!(queue.poll(), Err(PollError::Empty));
}

#[test]
fn gated_queue_clean_up_resets_queue() {
  let queue = ArcGatedQueue::new(2);
  queue.offer(1).unwrap();
  queue.offer(2).unwrap();

  queue.clean_up();
  assert_eq!(queue.len(), 0);
  assert_eq!(queue.poll(), Err(PollError::Empty));
}

#[test]
fn gated_queue_offer_error_returns_element() {
  let queue = ArcGatedQueue::new(1);
  queue.offer("first".to_string()).unwrap();

  let rejected = queue.offer("second".to_string()).unwrap_err();
  assert_eq!(rejected, OfferError::Full("second".to_string()));
  assert_eq!(rejected.into_element(), "second");
}

#[test]
fn gated_queue_mut_surface_matches_shared_surface() {
  let mut queue = ArcGatedQueue::new(1);
  queue.offer_mut(9).unwrap();
  assert!(queue.is_full());
  assert_eq!(queue.poll_mut(), Ok(9));
  queue.clean_up_mut();
  assert!(queue.is_empty());
}
