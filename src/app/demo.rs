use crate::core::{zoo::Zoo, Enclosure, Habitat};
use crate::domain::model::{Lion, Penguin, Snake};

/// The fixed zoo run by the binary: one lion, one penguin, one snake.
pub fn build_demo_zoo() -> Zoo {
    let mut savanna = Enclosure::new("Savanna", Habitat::Savanna);
    savanna.add(Lion::new("Simba", 5));

    let mut aquarium = Enclosure::new("Aquarium", Habitat::Aquarium);
    aquarium.add(Penguin::new("Pingo", 2));

    let mut terrarium = Enclosure::new("Terrarium", Habitat::Jungle);
    terrarium.add(Snake::new("Kaa", 7));

    let mut zoo = Zoo::new();
    zoo.add_enclosure(savanna);
    zoo.add_enclosure(aquarium);
    zoo.add_enclosure(terrarium);
    zoo
}
