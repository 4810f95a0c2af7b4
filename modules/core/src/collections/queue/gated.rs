//! Gated bounded queue implementation layers.

mod arc_shared_gated_queue;
mod gate_backend;
mod gate_handle;
mod gate_storage_backend;
mod gated_buffer;
mod gated_queue;

pub use arc_shared_gated_queue::ArcSharedGatedQueue;
pub use gate_backend::GateBackend;
pub use gate_handle::GateHandle;
pub use gate_storage_backend::GateStorageBackend;
pub use gated_buffer::{GatedBuffer, DEFAULT_CAPACITY};
pub use gated_queue::GatedQueue;
