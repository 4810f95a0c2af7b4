mod queue_base;
mod queue_gate;
mod queue_handle;
mod queue_reader;
mod queue_rw;
mod queue_writer;

pub use queue_base::QueueBase;
pub use queue_gate::QueueGate;
pub use queue_handle::QueueHandle;
pub use queue_reader::QueueReader;
pub use queue_rw::QueueRw;
pub use queue_writer::QueueWriter;
