#![forbid(unsafe_code)]

pub mod model;
pub mod plan;
pub mod streak;
pub mod time;

pub use time::Clock;
