use crate::collections::queue::{traits::queue_base::QueueBase, OfferError, PollError};

/// Trait providing read/write operations for the queue using shared references.
pub trait QueueRw<E>: QueueBase<E> {
  /// Adds an element to the queue (shared reference version).
  ///
  /// # Errors
  ///
  /// Returns an [`OfferError`] carrying the rejected element when the queue is
  /// closed, locked, or full.
  fn offer(&self, element: E) -> Result<(), OfferError<E>>;

  /// Removes an element from the queue (shared reference version).
  ///
  /// # Errors
  ///
  /// Returns a [`PollError`] when the queue is closed, locked, or empty.
  fn poll(&self) -> Result<E, PollError>;

  /// Drops every stored element (shared reference version).
  fn clean_up(&self);
}
