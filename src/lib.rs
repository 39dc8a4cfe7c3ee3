//! evm-chart: Earned Value Management metrics and S-curve chart rendering.
//!
//! This crate provides the request-scoped core behind a single-screen EVM
//! calculator: a pure metrics engine deriving the standard indices and
//! estimates from the entry-form inputs, a deterministic chart-frame builder
//! for the three progress S-curves with shaded variance regions, and bitmap
//! backends producing in-memory JPEG buffers for on-screen display and
//! export. No persistence, no network, no shared state between calls.

pub mod core;
pub mod error;
pub mod export;
pub mod render;
pub mod telemetry;

pub use crate::core::{EvmInputs, EvmMetrics};
pub use error::{EvmError, EvmResult};
