use gatefifo_core_rs::{GatedBuffer, QueueStorage};

use crate::sync::StdSyncMutex;

/// Mutex-backed storage for gated buffers used in std environments.
pub struct MutexGatedStorage<E> {
  inner: StdSyncMutex<GatedBuffer<E>>,
}

impl<E> MutexGatedStorage<E> {
  /// Creates storage holding an empty, unlocked, open buffer of the given capacity.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { inner: StdSyncMutex::new(GatedBuffer::new(capacity)) }
  }
}

impl<E> QueueStorage<E> for MutexGatedStorage<E> {
  fn with_read<R>(&self, f: impl FnOnce(&GatedBuffer<E>) -> R) -> R {
    let guard = self.inner.lock();
    f(&guard)
  }

  fn with_write<R>(&self, f: impl FnOnce(&mut GatedBuffer<E>) -> R) -> R {
    let mut guard = self.inner.lock();
    f(&mut guard)
  }
}
