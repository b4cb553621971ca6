// Domain layer: directory models and the ports (traits) the runner and config speak through.

pub mod model;
pub mod ports;
