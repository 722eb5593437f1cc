//! Housekeeping jobs that run next to the HTTP server.

mod scheduler;

pub use scheduler::{Scheduler, SchedulerConfig, schedule_session_sweep};
