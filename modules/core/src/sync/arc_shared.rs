use alloc::sync::Arc;
use core::{fmt, ops::Deref};

use crate::{
  collections::{GateBackend, GateHandle, QueueHandle, QueueStorage},
  sync::Shared,
};

/// Shared ownership wrapper backed by [`alloc::sync::Arc`].
///
/// Implements the [`Shared`] trait together with the queue handle traits, so
/// it can stand directly between the queue facade and its backend or storage.
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }
}

impl<T: ?Sized> ArcShared<T> {
  /// Wraps an existing `Arc` in the shared wrapper.
  #[must_use]
  pub const fn from_arc(inner: Arc<T>) -> Self {
    Self(inner)
  }

  /// Consumes the wrapper and returns the inner `Arc`.
  #[must_use]
  pub fn into_arc(self) -> Arc<T> {
    self.0
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArcShared").finish()
  }
}

impl<T: ?Sized> Shared<T> for ArcShared<T> {
  fn try_unwrap(self) -> Result<T, Self>
  where
    T: Sized, {
    Arc::try_unwrap(self.0).map_err(ArcShared)
  }
}

impl<T, E> QueueHandle<E> for ArcShared<T>
where
  T: QueueStorage<E>,
{
  type Storage = T;

  fn storage(&self) -> &Self::Storage {
    &self.0
  }
}

impl<E, B> GateHandle<E> for ArcShared<B>
where
  B: GateBackend<E> + ?Sized,
{
  type Backend = B;

  fn backend(&self) -> &Self::Backend {
    &self.0
  }
}
