// Adapters layer: concrete sinks for the routine's output.

pub mod console;
pub mod transcript;

pub use console::ConsoleAnnouncer;
pub use transcript::Transcript;
