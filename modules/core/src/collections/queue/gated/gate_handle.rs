use crate::{collections::queue::gated::gate_backend::GateBackend, sync::Shared};

/// Handle trait that provides references to a [`GateBackend`].
pub trait GateHandle<E>: Shared<Self::Backend> + Clone {
  /// Backend type referenced by this handle.
  type Backend: GateBackend<E> + ?Sized;

  /// Gets a reference to the backend.
  fn backend(&self) -> &Self::Backend;
}
