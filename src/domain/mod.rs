// Domain layer: the animal variants, habitats and the ports the routine talks through.

pub mod model;
pub mod ports;
