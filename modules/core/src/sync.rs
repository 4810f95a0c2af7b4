mod arc_shared;
mod rc_shared;
mod shared;
mod sync_mutex_like;

pub use arc_shared::ArcShared;
pub use rc_shared::RcShared;
pub use shared::Shared;
pub use sync_mutex_like::{SpinSyncMutex, SyncMutexLike, SyncMutexLikeGuard};
