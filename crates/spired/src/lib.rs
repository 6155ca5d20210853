pub mod error;
pub mod feed;
pub mod frame;
pub mod logging;

pub use error::{Error, Result};
