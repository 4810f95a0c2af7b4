//! Storage layer abstractions for gated queues.

mod queue_storage;

pub use queue_storage::QueueStorage;
