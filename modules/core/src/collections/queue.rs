//! Gated bounded FIFO queue primitives.

mod gated;
mod queue_error;
mod storage;
mod traits;

pub use gated::{
  ArcSharedGatedQueue, GateBackend, GateHandle, GateStorageBackend, GatedBuffer, GatedQueue, DEFAULT_CAPACITY,
};
pub use queue_error::{OfferError, PollError};
pub use storage::QueueStorage;
pub use traits::{QueueBase, QueueGate, QueueHandle, QueueReader, QueueRw, QueueWriter};
