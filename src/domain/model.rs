use crate::domain::ports::Animal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Habitat {
    Savanna,
    Aquarium,
    Jungle,
}

impl fmt::Display for Habitat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Habitat::Savanna => "Savanna",
            Habitat::Aquarium => "Aquarium",
            Habitat::Jungle => "Jungle",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lion {
    name: String,
    age: u32,
}

impl Lion {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Animal for Lion {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn species(&self) -> &'static str {
        "Lion"
    }

    fn move_around(&self) -> String {
        format!("{} walks proudly around the enclosure.", self.name)
    }

    fn vocalize(&self) -> String {
        format!("{} roars: ROAAAR!", self.name)
    }

    fn eat(&self) -> String {
        format!("{} devours meat.", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Penguin {
    name: String,
    age: u32,
}

impl Penguin {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Animal for Penguin {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn species(&self) -> &'static str {
        "Penguin"
    }

    fn move_around(&self) -> String {
        format!("{} swims and slides on the ice.", self.name)
    }

    fn vocalize(&self) -> String {
        format!("{} calls: kwa-kwa!", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    name: String,
    age: u32,
}

impl Snake {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Animal for Snake {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn species(&self) -> &'static str {
        "Snake"
    }

    fn move_around(&self) -> String {
        format!("{} crawls silently.", self.name)
    }

    fn vocalize(&self) -> String {
        format!("{} hisses: ssssss!", self.name)
    }
}
