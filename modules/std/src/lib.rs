#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unused_self)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::from_over_into)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::if_same_then_else)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]

//! std bindings for gatefifo.
//!
//! Binds the abstractions defined in `gatefifo_core_rs` to `std::sync`
//! primitives: [`StdSyncMutex`] guards the gated buffer, and
//! [`ArcGatedQueue`] is the user-facing bounded FIFO queue with quiesce
//! (`lock`/`unlock`) and teardown (`close`) gates. The surface is mostly
//! re-exports so that callers depend on this crate alone.

/// Collection data structures tailored for std environments.
pub mod collections;
/// Shared ownership and mutual exclusion primitives for std environments.
pub mod sync;

pub use collections::{ArcGatedQueue, MutexGatedStorage};
pub use gatefifo_core_rs::{
  ArcSharedGatedQueue, GateBackend, GateHandle, GateStorageBackend, GatedBuffer, GatedQueue, OfferError, PollError,
  QueueBase, QueueGate, QueueHandle, QueueReader, QueueRw, QueueStorage, QueueWriter, Shared, SyncMutexLike,
  DEFAULT_CAPACITY,
};
pub use sync::{StdMutexGuard, StdSyncMutex};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use gatefifo_core_rs::{
    GateBackend, GatedBuffer, GatedQueue, OfferError, PollError, QueueBase, QueueGate, QueueReader, QueueRw,
    QueueWriter, Shared, DEFAULT_CAPACITY,
  };

  pub use crate::{
    collections::{ArcGatedQueue, MutexGatedStorage},
    sync::{ArcShared, StdSyncMutex},
  };
}
