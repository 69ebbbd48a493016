use crate::utils::error::Result;

/// Capability set shared by every creature in the zoo.
///
/// Each behaviour returns the single line it describes; emitting it is left
/// to whoever drives the routine.
pub trait Animal {
    fn name(&self) -> &str;
    fn age(&self) -> u32;

    /// Display label of the variant, used in diagnostics.
    fn species(&self) -> &'static str;

    fn move_around(&self) -> String;
    fn vocalize(&self) -> String;

    fn eat(&self) -> String {
        default_ration(self.name())
    }
}

/// Feeding line used by every animal that does not specialise `eat`.
pub fn default_ration(name: &str) -> String {
    format!("{} eats its ration.", name)
}

/// Sink for the lines produced by a routine.
pub trait Announcer {
    fn announce(&mut self, line: &str) -> Result<()>;
}
