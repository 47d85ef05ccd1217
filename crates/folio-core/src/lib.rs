pub mod avatar;
pub mod config;
pub mod constants;
pub mod error;
pub mod particles;
pub mod pose;
pub mod rig;
pub mod schedule;
pub mod surface;

pub use config::*;
pub use error::{Error, Result};
pub use particles::*;
pub use pose::*;
pub use rig::*;
pub use schedule::*;
pub use surface::*;
