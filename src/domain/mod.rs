// Domain layer: record schemas and the content store port.

pub mod model;
pub mod ports;
