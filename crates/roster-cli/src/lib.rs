//! Library components of the `roster` terminal host.

pub mod logging;
pub mod render;
pub mod state_dir;
