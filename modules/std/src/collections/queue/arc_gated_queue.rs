use std::fmt;

use gatefifo_core_rs::{
  GateStorageBackend, GatedQueue, OfferError, PollError, QueueBase, QueueGate, QueueReader, QueueRw, QueueWriter,
  DEFAULT_CAPACITY,
};

use crate::{collections::queue::MutexGatedStorage, sync::ArcShared};

#[cfg(test)]
mod tests;

type ArcGatedStorage<E> = ArcShared<GateStorageBackend<ArcShared<MutexGatedStorage<E>>>>;

/// Bounded FIFO queue with quiesce and teardown gates.
///
/// Fixed capacity, strict FIFO, and two independent lifecycle switches:
/// `lock`/`unlock` reversibly suspend both enqueueing and dequeueing without
/// discarding contents, and `close` permanently retires the instance while
/// `len`/`capacity` keep reporting truthfully. Operations never block; they
/// fail fast with [`OfferError`] or [`PollError`]. Can be safely accessed from
/// multiple threads; clones share the same underlying instance.
pub struct ArcGatedQueue<E> {
  inner: GatedQueue<ArcGatedStorage<E>, E>,
}

impl<E> ArcGatedQueue<E> {
  /// Creates a new queue with the specified fixed capacity.
  ///
  /// A zero capacity is accepted; such a queue rejects every offer with
  /// [`OfferError::Full`] and never grows.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    let storage = ArcShared::new(MutexGatedStorage::with_capacity(capacity));
    let backend: ArcGatedStorage<E> = ArcShared::new(GateStorageBackend::new(storage));
    Self { inner: GatedQueue::new(backend) }
  }
}

impl<E> Default for ArcGatedQueue<E> {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}

impl<E> Clone for ArcGatedQueue<E> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<E> fmt::Debug for ArcGatedQueue<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArcGatedQueue").finish()
  }
}

impl<E> QueueBase<E> for ArcGatedQueue<E> {
  fn len(&self) -> usize {
    self.inner.len()
  }

  fn capacity(&self) -> usize {
    self.inner.capacity()
  }
}

impl<E> QueueWriter<E> for ArcGatedQueue<E> {
  fn offer_mut(&mut self, element: E) -> Result<(), OfferError<E>> {
    self.inner.offer_mut(element)
  }
}

impl<E> QueueReader<E> for ArcGatedQueue<E> {
  fn poll_mut(&mut self) -> Result<E, PollError> {
    self.inner.poll_mut()
  }

  fn clean_up_mut(&mut self) {
    self.inner.clean_up_mut();
  }
}

impl<E> QueueRw<E> for ArcGatedQueue<E> {
  fn offer(&self, element: E) -> Result<(), OfferError<E>> {
    self.inner.offer(element)
  }

  fn poll(&self) -> Result<E, PollError> {
    self.inner.poll()
  }

  fn clean_up(&self) {
    self.inner.clean_up();
  }
}

impl<E> QueueGate for ArcGatedQueue<E> {
  fn lock(&self) {
    self.inner.lock();
  }

  fn unlock(&self) {
    self.inner.unlock();
  }

  fn is_locked(&self) -> bool {
    self.inner.is_locked()
  }

  fn close(&self) {
    self.inner.close();
  }

  fn is_closed(&self) -> bool {
    self.inner.is_closed()
  }
}
