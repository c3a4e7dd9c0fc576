//! Caller-facing loading plans.
//!
//! Turns hardware stock and transporter records into a validated [`Plan`]
//! and runs it, either in place or on a background thread with
//! [`PlanWorker`]. Transporter capacities are reduced by the driver's weight
//! before anything is solved. One transporter is loaded directly by the
//! single-container solver; two go through the partition orchestrator.

mod plan;
mod types;
mod worker;

pub use plan::Plan;
pub use types::{Hardware, LoadPlan, Transporter};
pub use worker::{PlanMessage, PlanWorker};
