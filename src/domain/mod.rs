// Domain layer: core models and ports (interfaces). No external service
// dependencies; wire formats live under adapters.

pub mod model;
pub mod ports;
