use crate::collections::queue::storage::QueueStorage;

/// Handle trait that provides references to queue storage.
pub trait QueueHandle<E> {
  /// Storage type referenced by this handle.
  type Storage: QueueStorage<E>;

  /// Gets a reference to the storage.
  fn storage(&self) -> &Self::Storage;
}
