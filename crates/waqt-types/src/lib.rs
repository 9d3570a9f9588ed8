pub mod domain;
pub mod error;
pub mod schedule;

pub use domain::*;
pub use error::{Error, Result};
pub use schedule::*;
