pub mod pointer;

pub use pointer::{client_point, wire_rig_pointermove};
