// Domain layer: carousel data types and the renderer port. Geometry and state logic live in core.

pub mod frame;
pub mod model;
pub mod motion;
pub mod ports;
