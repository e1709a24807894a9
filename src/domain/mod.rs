// Domain layer: record model and the ports the interactive adapters implement.

pub mod model;
pub mod ports;
