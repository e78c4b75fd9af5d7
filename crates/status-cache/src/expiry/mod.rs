//! Status expiry computation.

mod scheduled_end_time;

pub use scheduled_end_time::{
    compute_scheduled_end_time, compute_scheduled_end_time_at, to_wire_seconds, ScheduledEndTimes,
};
