//! Top-level facade crate for svcprobe.
//!
//! Re-exports the core windows and the server library so users can depend on a single crate.

pub mod core {
    pub use svcprobe_core::*;
}

pub mod server {
    pub use svcprobe_server::*;
}
