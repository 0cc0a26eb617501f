pub mod io;
pub mod state;
pub mod ui;
pub mod websheet;

pub use crate::websheet::{Config, ConfigError, ErrorHandler, Template, WebSheet};
