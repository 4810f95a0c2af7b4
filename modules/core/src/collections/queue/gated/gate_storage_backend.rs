use crate::collections::queue::{
  gated::gate_backend::GateBackend,
  storage::QueueStorage,
  traits::QueueHandle,
  OfferError, PollError,
};

/// Backend implementation that operates directly on gated buffer storage handles.
#[derive(Debug)]
pub struct GateStorageBackend<S> {
  storage: S,
}

impl<S> GateStorageBackend<S> {
  /// Creates a new `GateStorageBackend`.
  #[must_use]
  pub const fn new(storage: S) -> Self {
    Self { storage }
  }

  /// Gets a reference to the storage handle.
  #[must_use]
  pub const fn storage(&self) -> &S {
    &self.storage
  }

  /// Consumes this backend and returns the internal storage handle.
  pub fn into_storage(self) -> S {
    self.storage
  }
}

impl<S, E> GateBackend<E> for GateStorageBackend<S>
where
  S: QueueHandle<E>,
{
  fn offer(&self, element: E) -> Result<(), OfferError<E>> {
    self.storage().storage().with_write(|buffer| buffer.offer_mut(element))
  }

  fn poll(&self) -> Result<E, PollError> {
    self.storage().storage().with_write(|buffer| buffer.poll_mut())
  }

  fn clean_up(&self) {
    self.storage().storage().with_write(|buffer| buffer.clean_up_mut());
  }

  fn len(&self) -> usize {
    self.storage().storage().with_read(|buffer| buffer.len())
  }

  fn capacity(&self) -> usize {
    self.storage().storage().with_read(|buffer| buffer.capacity())
  }

  fn lock(&self) {
    self.storage().storage().with_write(|buffer| buffer.set_locked(true));
  }

  fn unlock(&self) {
    self.storage().storage().with_write(|buffer| buffer.set_locked(false));
  }

  fn is_locked(&self) -> bool {
    self.storage().storage().with_read(|buffer| buffer.is_locked())
  }

  fn close(&self) {
    self.storage().storage().with_write(|buffer| buffer.close_mut());
  }

  fn is_closed(&self) -> bool {
    self.storage().storage().with_read(|buffer| buffer.is_closed())
  }
}
