// Domain layer: value types and ports. Image buffers come from the image crate.

pub mod model;
pub mod ports;
