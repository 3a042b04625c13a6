// Domain layer: the EC2 shapes and the ports external collaborators implement.

pub mod model;
pub mod ports;
