pub mod adapters;
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{ConsoleAnnouncer, Transcript};
pub use crate::core::{enclosure::Enclosure, zoo::Zoo};
pub use crate::domain::model::{Habitat, Lion, Penguin, Snake};
pub use crate::domain::ports::{Animal, Announcer};
pub use crate::utils::error::{Result, ZooError};
