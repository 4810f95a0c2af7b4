use crate::collections::queue::{OfferError, PollError};

/// Backend abstraction trait for gated bounded queues.
///
/// Every operation is atomic with respect to the others: implementations route
/// all state access through one mutual-exclusion domain per queue instance.
pub trait GateBackend<E> {
  /// Adds an element to the tail of the queue.
  ///
  /// # Errors
  ///
  /// Returns an [`OfferError`] carrying the rejected element when the queue is
  /// closed, locked, or full.
  fn offer(&self, element: E) -> Result<(), OfferError<E>>;

  /// Removes and returns the element at the head of the queue.
  ///
  /// # Errors
  ///
  /// Returns a [`PollError`] when the queue is closed, locked, or empty.
  fn poll(&self) -> Result<E, PollError>;

  /// Drops every stored element, keeping capacity and gate flags intact.
  fn clean_up(&self);

  /// Returns the number of elements currently stored.
  fn len(&self) -> usize;

  /// Returns the fixed capacity.
  fn capacity(&self) -> usize;

  /// Quiesces the queue; offers and polls fail until [`GateBackend::unlock`].
  fn lock(&self);

  /// Lifts the quiesce flag.
  fn unlock(&self);

  /// Returns whether the queue is currently quiesced.
  fn is_locked(&self) -> bool;

  /// Closes the queue permanently. Calling it again is a no-op.
  fn close(&self);

  /// Returns whether the queue has been closed.
  fn is_closed(&self) -> bool;

  /// Checks if the queue is empty.
  #[must_use]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Checks if the queue is full.
  #[must_use]
  fn is_full(&self) -> bool {
    self.len() == self.capacity()
  }
}
