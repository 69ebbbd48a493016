pub mod enclosure;
pub mod zoo;

pub use crate::core::enclosure::Enclosure;
pub use crate::domain::model::Habitat;
pub use crate::domain::ports::{Animal, Announcer};
pub use crate::utils::error::Result;
