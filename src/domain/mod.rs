// Domain layer: case model and storage port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
