//! Gated queue flavours backed by `std::sync` primitives.

mod arc_gated_queue;
mod mutex_gated_storage;

pub use arc_gated_queue::ArcGatedQueue;
pub use mutex_gated_storage::MutexGatedStorage;
