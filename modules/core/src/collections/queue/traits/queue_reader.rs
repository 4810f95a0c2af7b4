use crate::collections::queue::{traits::queue_base::QueueBase, PollError};

/// Trait providing read operations from the queue for mutable references.
pub trait QueueReader<E>: QueueBase<E> {
  /// Removes an element from the queue (mutable reference version).
  ///
  /// # Errors
  ///
  /// Returns a [`PollError`] when the queue is closed, locked, or empty.
  fn poll_mut(&mut self) -> Result<E, PollError>;

  /// Drops every stored element (mutable reference version).
  fn clean_up_mut(&mut self);
}
