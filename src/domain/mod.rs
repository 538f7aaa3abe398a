// Domain layer: tabular model, season rules and the ports the exporter is built on.

pub mod model;
pub mod ports;
pub mod season;
