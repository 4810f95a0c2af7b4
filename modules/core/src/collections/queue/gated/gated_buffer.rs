use alloc::vec::Vec;

use crate::collections::queue::{OfferError, PollError};


/// Capacity used by `Default` constructors of the concrete queues.
pub const DEFAULT_CAPACITY: usize = 64;

/// Fixed-capacity FIFO ring with quiesce and teardown gates.
///
/// Plain mutable state: mutual exclusion is supplied by the surrounding
/// [`QueueStorage`](crate::collections::queue::QueueStorage) implementation.
/// All lifecycle checks live here so every storage flavour shares a single
/// semantics: `closed` dominates `locked`, `locked` suppresses both offer and
/// poll, and the capacity bound is enforced at offer time.
pub struct GatedBuffer<E> {
  cells:  Vec<Option<E>>,
  head:   usize,
  len:    usize,
  locked: bool,
  closed: bool,
}

impl<E> GatedBuffer<E> {
  /// Creates an empty, unlocked, open buffer with the given fixed capacity.
  ///
  /// A zero capacity is accepted; such a buffer rejects every offer with
  /// [`OfferError::Full`] and never grows.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    let mut cells = Vec::with_capacity(capacity);
    cells.resize_with(capacity, || None);
    Self { cells, head: 0, len: 0, locked: false, closed: false }
  }

  /// Appends an element to the tail of the buffer.
  ///
  /// # Errors
  ///
  /// Returns [`OfferError::Closed`] after `close_mut`, [`OfferError::Locked`]
  /// while quiesced, and [`OfferError::Full`] at capacity, in that order of
  /// precedence. The rejected element is handed back inside the error.
  pub fn offer_mut(&mut self, element: E) -> Result<(), OfferError<E>> {
    if self.closed {
      return Err(OfferError::Closed(element));
    }
    if self.locked {
      return Err(OfferError::Locked(element));
    }
    if self.len == self.cells.len() {
      return Err(OfferError::Full(element));
    }

    let tail = (self.head + self.len) % self.cells.len();
    self.cells[tail] = Some(element);
    self.len += 1;
    Ok(())
  }

  /// Removes and returns the element at the head of the buffer.
  ///
  /// # Errors
  ///
  /// Returns [`PollError::Closed`] after `close_mut` (even when elements
  /// remain), [`PollError::Locked`] while quiesced (likewise), and
  /// [`PollError::Empty`] when nothing is stored.
  pub fn poll_mut(&mut self) -> Result<E, PollError> {
    if self.closed {
      return Err(PollError::Closed);
    }
    if self.locked {
      return Err(PollError::Locked);
    }

    match self.cells.get_mut(self.head).and_then(Option::take) {
      | Some(element) => {
        self.head = (self.head + 1) % self.cells.len();
        self.len -= 1;
        Ok(element)
      },
      | None => Err(PollError::Empty),
    }
  }

  /// Drops every stored element, keeping capacity and gate flags intact.
  pub fn clean_up_mut(&mut self) {
    for cell in &mut self.cells {
      *cell = None;
    }
    self.head = 0;
    self.len = 0;
  }

  /// Returns the number of elements currently stored.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns the fixed capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.cells.len()
  }

  /// Checks if the buffer is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Checks if the buffer is full.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.len == self.cells.len()
  }

  /// Updates the quiesce flag. Idempotent in both directions.
  pub fn set_locked(&mut self, locked: bool) {
    self.locked = locked;
  }

  /// Returns the current quiesce flag.
  #[must_use]
  pub const fn is_locked(&self) -> bool {
    self.locked
  }

  /// Closes the buffer permanently. Calling it again is a no-op.
  pub fn close_mut(&mut self) {
    self.closed = true;
  }

  /// Returns the teardown flag.
  #[must_use]
  pub const fn is_closed(&self) -> bool {
    self.closed
  }
}

impl<E> Default for GatedBuffer<E> {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}
