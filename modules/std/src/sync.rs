mod std_sync_mutex;

pub use gatefifo_core_rs::{ArcShared, RcShared, Shared};
pub use std_sync_mutex::{StdMutexGuard, StdSyncMutex};
