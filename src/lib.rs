pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[doc(hidden)]
pub use paste::paste as __paste;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::document::{DocumentFormat, DocumentUnmarshaller};
pub use crate::core::{
    DryRunSupportedRequest, Ec2Request, Inspection, Inspector, OutputFormat, PaginatedRequest,
    PaginatedResult, Shape, ShapeField, Timestamp, WireRequest,
};
pub use domain::model::enums::Ec2Enum;
pub use domain::ports::{Marshaller, Unmarshaller};
pub use utils::error::{ModelError, Result};
