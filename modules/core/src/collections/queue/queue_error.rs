use core::{error, fmt};

/// Errors that occur while offering an element to a gated queue.
///
/// Every variant carries the rejected element back to the caller, so a failed
/// offer never costs ownership of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferError<E> {
  /// The queue is at capacity and cannot accept more elements.
  Full(E),
  /// The queue is quiesced by `lock` and rejects traffic until `unlock`.
  Locked(E),
  /// The queue has been closed and will never accept elements again.
  Closed(E),
}

impl<E> OfferError<E> {
  /// Recovers the element rejected by the failed offer.
  #[must_use]
  pub fn into_element(self) -> E {
    match self {
      | Self::Full(element) | Self::Locked(element) | Self::Closed(element) => element,
    }
  }

  /// Indicates whether the failure is permanent for this queue instance.
  #[must_use]
  pub const fn is_terminal(&self) -> bool {
    matches!(self, Self::Closed(_))
  }
}

impl<E> fmt::Display for OfferError<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Full(_) => f.write_str("queue is full"),
      | Self::Locked(_) => f.write_str("queue is locked"),
      | Self::Closed(_) => f.write_str("queue is closed"),
    }
  }
}

impl<E: fmt::Debug> error::Error for OfferError<E> {}

/// Errors that occur while polling an element from a gated queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollError {
  /// The queue has no elements to consume.
  Empty,
  /// The queue is quiesced by `lock`; stored elements stay put until `unlock`.
  Locked,
  /// The queue has been closed and is permanently inert.
  Closed,
}

impl PollError {
  /// Indicates whether the failure is permanent for this queue instance.
  #[must_use]
  pub const fn is_terminal(&self) -> bool {
    matches!(self, Self::Closed)
  }
}

impl fmt::Display for PollError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Empty => f.write_str("queue is empty"),
      | Self::Locked => f.write_str("queue is locked"),
      | Self::Closed => f.write_str("queue is closed"),
    }
  }
}

impl error::Error for PollError {}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::string::ToString;

  use super::*;

  #[test]
  fn offer_error_full_returns_element() {
    let error = OfferError::Full(42);
    assert_eq!(error.into_element(), 42);
  }

  #[test]
  fn offer_error_locked_returns_element() {
    let error = OfferError::Locked("pending");
    assert_eq!(error.into_element(), "pending");
  }

  #[test]
  fn offer_error_closed_returns_element() {
    let error = OfferError::Closed(7);
    assert!(error.is_terminal());
    assert_eq!(error.into_element(), 7);
  }

  #[test]
  fn offer_error_full_is_not_terminal() {
    assert!(!OfferError::Full(0).is_terminal());
    assert!(!OfferError::Locked(0).is_terminal());
  }

  #[test]
  fn poll_error_only_closed_is_terminal() {
    assert!(PollError::Closed.is_terminal());
    assert!(!PollError::Empty.is_terminal());
    assert!(!PollError::Locked.is_terminal());
  }

  #[test]
  fn error_display_names_the_condition() {
    assert_eq!(OfferError::Full(1).to_string(), "queue is full");
    assert_eq!(PollError::Empty.to_string(), "queue is empty");
    assert_eq!(PollError::Closed.to_string(), "queue is closed");
  }

  #[test]
  fn errors_are_comparable() {
    assert_eq!(OfferError::Full(1), OfferError::Full(1));
    assert_ne!(OfferError::Full(1), OfferError::Locked(1));
    assert_eq!(PollError::Empty, PollError::Empty);
    assert_ne!(PollError::Empty, PollError::Closed);
  }
}
