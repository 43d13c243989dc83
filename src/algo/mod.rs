//! Mesh processing algorithms.
//!
//! - **Connectivity**: extraction of connected cell regions, optionally
//!   restricted by a point-scalar range ([`connectivity`])
//! - **Progress**: progress callbacks and cooperative cancellation shared by
//!   all algorithms ([`Progress`])

pub mod connectivity;
pub mod progress;

pub use progress::Progress;
