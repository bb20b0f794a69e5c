//! Shared vocabulary for the PS7 co-simulation generator.
//!
//! This crate provides the fixed AXI interface table with its canonical order,
//! the fabric clock indices, immutable width-parameter records, content hashing
//! for generated artifacts, and the internal error type.

#![warn(missing_docs)]

pub mod axi;
pub mod clock;
pub mod hash;
pub mod result;

pub use axi::{AxiClass, AxiParams, AxiPort, AxiRole, WidthField};
pub use clock::ClockIndex;
pub use hash::ContentHash;
pub use result::{CosimResult, InternalError};
