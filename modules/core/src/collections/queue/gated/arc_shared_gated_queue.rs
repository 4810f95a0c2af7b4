use core::fmt;

use crate::{
  collections::queue::{
    gated::{GateStorageBackend, GatedBuffer, GatedQueue, DEFAULT_CAPACITY},
    traits::{QueueBase, QueueGate, QueueReader, QueueRw, QueueWriter},
    OfferError, PollError,
  },
  sync::{ArcShared, SpinSyncMutex},
};


type SharedGatedStorage<E> = ArcShared<GateStorageBackend<ArcShared<SpinSyncMutex<GatedBuffer<E>>>>>;

/// [`GatedQueue`] wrapper backed by [`ArcShared`] + [`SpinSyncMutex`].
///
/// Suitable for `no_std` targets with atomic pointer support; std callers
/// normally prefer the `std::sync::Mutex`-backed queue from `gatefifo-std-rs`.
pub struct ArcSharedGatedQueue<E> {
  inner: GatedQueue<SharedGatedStorage<E>, E>,
}

impl<E> ArcSharedGatedQueue<E> {
  /// Creates a new queue with the given fixed capacity.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    let storage = ArcShared::new(SpinSyncMutex::new(GatedBuffer::new(capacity)));
    let backend = ArcShared::new(GateStorageBackend::new(storage));
    Self { inner: GatedQueue::new(backend) }
  }
}

impl<E> Default for ArcSharedGatedQueue<E> {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}

impl<E> Clone for ArcSharedGatedQueue<E> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<E> fmt::Debug for ArcSharedGatedQueue<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArcSharedGatedQueue").finish()
  }
}

impl<E> QueueBase<E> for ArcSharedGatedQueue<E> {
  fn len(&self) -> usize {
    self.inner.len()
  }

  fn capacity(&self) -> usize {
    self.inner.capacity()
  }
}

impl<E> QueueWriter<E> for ArcSharedGatedQueue<E> {
  fn offer_mut(&mut self, element: E) -> Result<(), OfferError<E>> {
    self.inner.offer_mut(element)
  }
}

impl<E> QueueReader<E> for ArcSharedGatedQueue<E> {
  fn poll_mut(&mut self) -> Result<E, PollError> {
    self.inner.poll_mut()
  }

  fn clean_up_mut(&mut self) {
    self.inner.clean_up_mut();
  }
}

impl<E> QueueRw<E> for ArcSharedGatedQueue<E> {
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

impl<E> QueueGate for ArcSharedGatedQueue<E> {
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
