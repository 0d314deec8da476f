//! Deterministic calculators for South Korean military applicants.
//!
//! Two independent engines live under [`calculators`]: the recruitment score
//! estimator and the military installment-savings maturity estimator. Both
//! are pure functions over static tables; the HTTP router and the ambient
//! configuration/telemetry modules wrap them for the service binary.

pub mod calculators;
pub mod config;
pub mod error;
pub mod telemetry;
