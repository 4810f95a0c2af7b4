use alloc::rc::Rc;
use core::{fmt, ops::Deref};

use crate::{
  collections::{GateBackend, GateHandle, QueueHandle, QueueStorage},
  sync::Shared,
};

/// Shared ownership wrapper backed by [`alloc::rc::Rc`].
///
/// Single-threaded counterpart of [`ArcShared`](crate::sync::ArcShared),
/// pairing with `RefCell`-based storage on targets without atomics.
pub struct RcShared<T: ?Sized>(Rc<T>);

impl<T> RcShared<T> {
  /// Creates a new `RcShared` by wrapping the provided value.
  pub fn new(value: T) -> Self {
    Self(Rc::new(value))
  }
}

impl<T: ?Sized> Deref for RcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> Clone for RcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> fmt::Debug for RcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RcShared").finish()
  }
}

impl<T: ?Sized> Shared<T> for RcShared<T> {
  fn try_unwrap(self) -> Result<T, Self>
  where
    T: Sized, {
    Rc::try_unwrap(self.0).map_err(RcShared)
  }
}

impl<T, E> QueueHandle<E> for RcShared<T>
where
  T: QueueStorage<E>,
{
  type Storage = T;

  fn storage(&self) -> &Self::Storage {
    &self.0
  }
}

impl<E, B> GateHandle<E> for RcShared<B>
where
  B: GateBackend<E> + ?Sized,
{
  type Backend = B;

  fn backend(&self) -> &Self::Backend {
    &self.0
  }
}
