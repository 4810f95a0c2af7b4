use crate::collections::queue::{traits::queue_base::QueueBase, OfferError};

/// Trait providing write operations to the queue for mutable references.
pub trait QueueWriter<E>: QueueBase<E> {
  /// Adds an element to the queue (mutable reference version).
  ///
  /// # Errors
  ///
  /// Returns an [`OfferError`] carrying the rejected element when the queue is
  /// closed, locked, or full.
  fn offer_mut(&mut self, element: E) -> Result<(), OfferError<E>>;
}
