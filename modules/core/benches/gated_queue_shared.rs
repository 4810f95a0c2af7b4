use std::cell::RefCell;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gatefifo_core_rs::{ArcSharedGatedQueue, GateStorageBackend, GatedBuffer, GatedQueue, QueueRw, RcShared};

type RcGatedQueue = GatedQueue<RcShared<GateStorageBackend<RcShared<RefCell<GatedBuffer<u32>>>>>, u32>;

fn make_rc_gated_queue(capacity: usize) -> RcGatedQueue {
  let storage = RcShared::new(RefCell::new(GatedBuffer::new(capacity)));
  let backend = RcShared::new(GateStorageBackend::new(storage));
  GatedQueue::new(backend)
}

fn bench_gated_queue_offer_poll(c: &mut Criterion) {
  let mut group = c.benchmark_group("gated_queue_offer_poll");
  let batch = 128_u32;

  group.bench_function("rc_refcell", |b| {
    b.iter_batched(
      || make_rc_gated_queue(batch as usize),
      |queue: RcGatedQueue| {
        for value in 0..batch {
          queue.offer(value).unwrap();
        }
        for _ in 0..batch {
          let _ = queue.poll().unwrap();
        }
      },
      BatchSize::SmallInput,
    );
  });

  group.bench_function("arc_shared_spin", |b| {
    b.iter_batched(
      || ArcSharedGatedQueue::new(batch as usize),
      |queue: ArcSharedGatedQueue<u32>| {
        for value in 0..batch {
          queue.offer(value).unwrap();
        }
        for _ in 0..batch {
          let _ = queue.poll().unwrap();
        }
      },
      BatchSize::SmallInput,
    );
  });

  group.finish();
}

criterion_group!(benches, bench_gated_queue_offer_poll);
criterion_main!(benches);
