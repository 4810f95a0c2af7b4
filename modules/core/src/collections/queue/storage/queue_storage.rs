use core::cell::RefCell;

use crate::{
  collections::queue::gated::GatedBuffer,
  sync::{ArcShared, RcShared, SpinSyncMutex},
};

/// Queue storage abstraction trait.
///
/// Implementations supply the mutual-exclusion domain of a queue instance:
/// every closure runs fully before or fully after any other access to the same
/// buffer, which is what keeps the capacity bound and the gate checks
/// linearizable.
pub trait QueueStorage<E> {
  /// Executes the provided closure with an immutable reference to the buffer.
  fn with_read<R>(&self, f: impl FnOnce(&GatedBuffer<E>) -> R) -> R;

  /// Executes the provided closure with a mutable reference to the buffer.
  fn with_write<R>(&self, f: impl FnOnce(&mut GatedBuffer<E>) -> R) -> R;
}

impl<E> QueueStorage<E> for RefCell<GatedBuffer<E>> {
  fn with_read<R>(&self, f: impl FnOnce(&GatedBuffer<E>) -> R) -> R {
    let guard = self.borrow();
    f(&guard)
  }

  fn with_write<R>(&self, f: impl FnOnce(&mut GatedBuffer<E>) -> R) -> R {
    let mut guard = self.borrow_mut();
    f(&mut guard)
  }
}

impl<E> QueueStorage<E> for SpinSyncMutex<GatedBuffer<E>> {
  fn with_read<R>(&self, f: impl FnOnce(&GatedBuffer<E>) -> R) -> R {
    let guard = self.lock();
    f(&guard)
  }

  fn with_write<R>(&self, f: impl FnOnce(&mut GatedBuffer<E>) -> R) -> R {
    let mut guard = self.lock();
    f(&mut guard)
  }
}

impl<E> QueueStorage<E> for ArcShared<SpinSyncMutex<GatedBuffer<E>>> {
  fn with_read<R>(&self, f: impl FnOnce(&GatedBuffer<E>) -> R) -> R {
    (**self).with_read(f)
  }

  fn with_write<R>(&self, f: impl FnOnce(&mut GatedBuffer<E>) -> R) -> R {
    (**self).with_write(f)
  }
}

impl<E> QueueStorage<E> for RcShared<RefCell<GatedBuffer<E>>> {
  fn with_read<R>(&self, f: impl FnOnce(&GatedBuffer<E>) -> R) -> R {
    (**self).with_read(f)
  }

  fn with_write<R>(&self, f: impl FnOnce(&mut GatedBuffer<E>) -> R) -> R {
    (**self).with_write(f)
  }
}
