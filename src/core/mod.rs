pub mod field;
pub mod inspect;
pub mod request;
pub mod shape;

pub use field::{ShapeField, Timestamp};
pub use inspect::{Inspection, Inspector, OutputFormat, Shape};
pub use request::{
    DryRunSupportedRequest, Ec2Request, PaginatedRequest, PaginatedResult, WireRequest,
};
