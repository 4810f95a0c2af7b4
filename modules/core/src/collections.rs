mod queue;

pub use queue::{
  ArcSharedGatedQueue, GateBackend, GateHandle, GateStorageBackend, GatedBuffer, GatedQueue, OfferError, PollError,
  QueueBase, QueueGate, QueueHandle, QueueReader, QueueRw, QueueStorage, QueueWriter, DEFAULT_CAPACITY,
};
