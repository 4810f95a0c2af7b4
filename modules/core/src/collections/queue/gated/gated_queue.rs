use core::{fmt, marker::PhantomData};

use crate::collections::queue::{
  gated::{gate_backend::GateBackend, gate_handle::GateHandle},
  traits::{QueueBase, QueueGate, QueueReader, QueueRw, QueueWriter},
  OfferError, PollError,
};

/// Gated bounded FIFO queue parameterised by its backend handle.
///
/// The facade carries no state of its own: cloning it clones the handle, so
/// clones observe and mutate the same queue instance.
pub struct GatedQueue<H, E> {
  handle: H,
  _pd:    PhantomData<E>,
}

impl<H, E> GatedQueue<H, E>
where
  H: GateHandle<E>,
{
  /// Creates a new queue from the provided backend handle.
  #[must_use]
  pub const fn new(handle: H) -> Self {
    Self { handle, _pd: PhantomData }
  }

  /// Gets a reference to the backend handle.
  #[must_use]
  pub const fn handle(&self) -> &H {
    &self.handle
  }
}

impl<H: Clone, E> Clone for GatedQueue<H, E> {
  fn clone(&self) -> Self {
    Self { handle: self.handle.clone(), _pd: PhantomData }
  }
}

impl<H, E> fmt::Debug for GatedQueue<H, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GatedQueue").finish()
  }
}

impl<H, E> QueueBase<E> for GatedQueue<H, E>
where
  H: GateHandle<E>,
{
  fn len(&self) -> usize {
    self.handle.backend().len()
  }

  fn capacity(&self) -> usize {
    self.handle.backend().capacity()
  }
}

impl<H, E> QueueWriter<E> for GatedQueue<H, E>
where
  H: GateHandle<E>,
{
  fn offer_mut(&mut self, element: E) -> Result<(), OfferError<E>> {
    self.handle.backend().offer(element)
  }
}

impl<H, E> QueueReader<E> for GatedQueue<H, E>
where
  H: GateHandle<E>,
{
  fn poll_mut(&mut self) -> Result<E, PollError> {
    self.handle.backend().poll()
  }

  fn clean_up_mut(&mut self) {
    self.handle.backend().clean_up();
  }
}

impl<H, E> QueueRw<E> for GatedQueue<H, E>
where
  H: GateHandle<E>,
{
  fn offer(&self, element: E) -> Result<(), OfferError<E>> {
    self.handle.backend().offer(element)
  }

  fn poll(&self) -> Result<E, PollError> {
    self.handle.backend().poll()
  }

  fn clean_up(&self) {
    self.handle.backend().clean_up();
  }
}

impl<H, E> QueueGate for GatedQueue<H, E>
where
  H: GateHandle<E>,
{
  fn lock(&self) {
    self.handle.backend().lock();
  }

  fn unlock(&self) {
    self.handle.backend().unlock();
  }

  fn is_locked(&self) -> bool {
    self.handle.backend().is_locked()
  }

  fn close(&self) {
    self.handle.backend().close();
  }

  fn is_closed(&self) -> bool {
    self.handle.backend().is_closed()
  }
}
