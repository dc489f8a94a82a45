//! # tally-service
//!
//! Stateless query/administration surface over the roster store and the
//! attendance log, consumed by the dashboard/export layer. Typed
//! rejections propagate one level to the caller; nothing here panics.

pub mod export;
pub mod service;
pub mod telemetry;

pub use service::AttendanceService;
