pub mod record;
pub mod status;

pub use record::{Record, RecordId};
pub use status::{RECOGNIZED_STATUSES, describe_status, is_recognized_status};
