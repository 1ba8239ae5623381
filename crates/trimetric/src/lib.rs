//! Top-level facade crate for trimetric.
//!
//! Re-exports the chart core and the HTTP gateway so users can depend on a single crate.

pub mod core {
    pub use trimetric_core::*;
}

pub mod gateway {
    pub use trimetric_gateway::*;
}
