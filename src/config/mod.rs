//! Configuration models for the scheduler and its driver.

pub mod scheduler;

pub use scheduler::{
    SchedulerConfig, DEFAULT_MAX_LABEL_LEN, ENV_CAPACITY, ENV_HISTORY_CAPACITY, ENV_MAX_LABEL_LEN,
};
