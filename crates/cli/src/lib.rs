//! Console front end for the boutique catalog.
//!
//! Everything that touches the terminal lives here; the inventory crates
//! only produce strings and outcomes.

pub mod config;
pub mod console;
pub mod session;

pub use config::{CliConfig, ConfigError};
pub use console::{Console, StdConsole};
pub use session::{Flow, MenuChoice, Session};
