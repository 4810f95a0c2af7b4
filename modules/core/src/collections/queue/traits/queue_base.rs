/// Common trait defining basic queue observations.
pub trait QueueBase<E> {
  /// Returns the current number of stored elements.
  fn len(&self) -> usize;

  /// Returns the fixed capacity.
  fn capacity(&self) -> usize;

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
