mod queue;

pub use queue::{ArcGatedQueue, MutexGatedStorage};
