/// Trait providing the lifecycle gates of a queue.
///
/// `lock`/`unlock` form a reversible quiesce switch; `close` is one-way.
/// A closed queue reports [`Closed`](crate::collections::queue::PollError::Closed)
/// on traffic regardless of the quiesce flag.
pub trait QueueGate {
  /// Quiesces the queue: offers and polls fail until [`QueueGate::unlock`].
  /// Idempotent.
  fn lock(&self);

  /// Lifts the quiesce flag. Idempotent; has no effect on the close flag.
  fn unlock(&self);

  /// Returns whether the queue is currently quiesced.
  fn is_locked(&self) -> bool;

  /// Closes the queue permanently. Calling it again is a no-op.
  fn close(&self);

  /// Returns whether the queue has been closed.
  fn is_closed(&self) -> bool;
}
