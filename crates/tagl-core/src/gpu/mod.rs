//! Command stream format and the emitters that deliver it.

pub mod record;
pub mod sink;
pub mod store_queue;

pub use record::{Command, Record, CMD_HEADER, CMD_VERTEX, CMD_VERTEX_EOL};
pub use sink::{CommandSink, FixedSink};
pub use store_queue::{BurstLog, StoreQueueSink};
