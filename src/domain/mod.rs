// Domain layer: sites, request descriptions and the ports the core talks through.

pub mod model;
pub mod ports;
