#![no_std]
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

//! Runtime-agnostic core of gatefifo.
//!
//! gatefifo is a bounded, thread-safe FIFO queue governed by two independent
//! lifecycle gates: a reversible quiesce flag (`lock`/`unlock`) that suspends
//! both directions of flow without discarding contents, and an irreversible
//! `close` flag that renders the queue permanently inert for mutation while
//! keeping `len`/`capacity` observable. Operations never suspend; they fail
//! fast with [`OfferError`] or [`PollError`].
//!
//! This crate is `no_std` (with `alloc`) and keeps the operation logic in
//! [`GatedBuffer`], behind the [`QueueStorage`] seam, so the same semantics
//! serve `RefCell`-based single-threaded use, the spinlock-backed
//! [`ArcSharedGatedQueue`], and the `std::sync::Mutex` binding provided by
//! `gatefifo-std-rs`.

extern crate alloc;

/// Collection data structures for the gated queue.
pub mod collections;
/// Shared ownership and mutual exclusion abstractions.
pub mod sync;

pub use collections::{
  ArcSharedGatedQueue, GateBackend, GateHandle, GateStorageBackend, GatedBuffer, GatedQueue, OfferError, PollError,
  QueueBase, QueueGate, QueueHandle, QueueReader, QueueRw, QueueStorage, QueueWriter, DEFAULT_CAPACITY,
};
pub use sync::{ArcShared, RcShared, Shared, SpinSyncMutex, SyncMutexLike, SyncMutexLikeGuard};
