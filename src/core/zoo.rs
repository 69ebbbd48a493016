use crate::core::{Announcer, Enclosure, Result};

pub const BANNER: &str = "=== Zoo Routine ===";

#[derive(Debug, Default)]
pub struct Zoo {
    enclosures: Vec<Enclosure>,
}

impl Zoo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_enclosure(&mut self, enclosure: Enclosure) {
        self.enclosures.push(enclosure);
    }

    pub fn enclosures(&self) -> &[Enclosure] {
        &self.enclosures
    }

    /// Banner line, then every enclosure's morning routine in insertion order.
    pub fn run_routine(&self, out: &mut dyn Announcer) -> Result<()> {
        tracing::info!("Starting zoo routine ({} enclosures)", self.enclosures.len());

        out.announce(BANNER)?;
        for enclosure in &self.enclosures {
            enclosure.run_morning_routine(out)?;
        }

        tracing::info!("Zoo routine finished");
        Ok(())
    }
}
