use crate::core::{Animal, Announcer, Habitat, Result};

/// A named group of animals sharing one habitat.
pub struct Enclosure {
    name: String,
    habitat: Habitat,
    animals: Vec<Box<dyn Animal>>,
}

impl Enclosure {
    pub fn new(name: impl Into<String>, habitat: Habitat) -> Self {
        Self {
            name: name.into(),
            habitat,
            animals: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn habitat(&self) -> Habitat {
        self.habitat
    }

    /// Animals in insertion order.
    pub fn animals(&self) -> &[Box<dyn Animal>] {
        &self.animals
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn add<A: Animal + 'static>(&mut self, animal: A) {
        tracing::debug!(
            enclosure = %self.name,
            animal = animal.name(),
            species = animal.species(),
            age = animal.age(),
            "Adding animal"
        );
        self.animals.push(Box::new(animal));
    }

    pub fn header(&self) -> String {
        format!("=== Enclosure {} ({}) ===", self.name, self.habitat)
    }

    /// Header, then sound, movement and feeding for each animal in order.
    pub fn run_morning_routine(&self, out: &mut dyn Announcer) -> Result<()> {
        tracing::debug!(
            "Morning routine for {} ({} animals)",
            self.name,
            self.animals.len()
        );

        out.announce(&self.header())?;

        for animal in &self.animals {
            tracing::debug!("{} the {} wakes up", animal.name(), animal.species());
            out.announce(&animal.vocalize())?;
            out.announce(&animal.move_around())?;
            out.announce(&animal.eat())?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Enclosure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.animals.iter().map(|a| a.name()).collect();
        f.debug_struct("Enclosure")
            .field("name", &self.name)
            .field("habitat", &self.habitat)
            .field("animals", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::Transcript;
    use crate::domain::model::{Lion, Penguin, Snake};

    #[test]
    fn test_empty_enclosure_emits_only_header() {
        let enclosure = Enclosure::new("Savanna", Habitat::Savanna);
        let mut transcript = Transcript::new();

        enclosure.run_morning_routine(&mut transcript).unwrap();

        assert!(enclosure.is_empty());
        assert_eq!(transcript.lines(), ["=== Enclosure Savanna (Savanna) ==="]);
    }

    #[test]
    fn test_routine_keeps_insertion_order_and_sub_order() {
        let mut enclosure = Enclosure::new("Mixed", Habitat::Jungle);
        enclosure.add(Snake::new("Kaa", 7));
        enclosure.add(Lion::new("Simba", 5));
        enclosure.add(Penguin::new("Pingo", 2));
        let mut transcript = Transcript::new();

        enclosure.run_morning_routine(&mut transcript).unwrap();

        assert_eq!(
            transcript.lines(),
            [
                "=== Enclosure Mixed (Jungle) ===",
                "Kaa hisses: ssssss!",
                "Kaa crawls silently.",
                "Kaa eats its ration.",
                "Simba roars: ROAAAR!",
                "Simba walks proudly around the enclosure.",
                "Simba devours meat.",
                "Pingo calls: kwa-kwa!",
                "Pingo swims and slides on the ice.",
                "Pingo eats its ration.",
            ]
        );
    }

    #[test]
    fn test_one_triplet_per_animal() {
        let mut enclosure = Enclosure::new("Aquarium", Habitat::Aquarium);
        for i in 0..4 {
            enclosure.add(Penguin::new(format!("Pingo{}", i), i));
        }
        let mut transcript = Transcript::new();

        enclosure.run_morning_routine(&mut transcript).unwrap();

        assert_eq!(enclosure.len(), 4);
        let animal_lines = &transcript.lines()[1..];
        assert_eq!(animal_lines.len(), 3 * enclosure.len());
        for (i, triplet) in animal_lines.chunks(3).enumerate() {
            let name = format!("Pingo{}", i);
            assert!(triplet.iter().all(|line| line.starts_with(&name)));
        }
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let mut enclosure = Enclosure::new("Savanna", Habitat::Savanna);
        enclosure.add(Lion::new("Simba", 5));
        enclosure.add(Lion::new("Simba", 5));

        let names: Vec<&str> = enclosure.animals().iter().map(|a| a.name()).collect();
        assert_eq!(names, ["Simba", "Simba"]);
    }

    #[test]
    fn test_routine_is_idempotent() {
        let mut enclosure = Enclosure::new("Terrarium", Habitat::Jungle);
        enclosure.add(Snake::new("Kaa", 7));

        let mut first = Transcript::new();
        let mut second = Transcript::new();
        enclosure.run_morning_routine(&mut first).unwrap();
        enclosure.run_morning_routine(&mut second).unwrap();

        assert_eq!(first, second);
    }
}
