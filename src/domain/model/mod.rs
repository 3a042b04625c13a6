//! EC2 request, result and nested shapes, grouped by operation.

pub mod capacity_reservations;
pub mod common;
pub mod enums;
pub mod fleets;
pub mod flow_logs;
pub mod images;
pub mod instance_types;
pub mod instances;
pub mod network_interfaces;
pub mod reserved_instances;
pub mod route_tables;
pub mod run_instances;
pub mod security_groups;
pub mod spot_fleets;
pub mod spot_instances;
pub mod volumes;

pub use capacity_reservations::*;
pub use common::*;
pub use enums::*;
pub use fleets::*;
pub use flow_logs::*;
pub use images::*;
pub use instance_types::*;
pub use instances::*;
pub use network_interfaces::*;
pub use reserved_instances::*;
pub use route_tables::*;
pub use run_instances::*;
pub use security_groups::*;
pub use spot_fleets::*;
pub use spot_instances::*;
pub use volumes::*;
