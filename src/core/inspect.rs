//! Decoding named shapes from documents and rendering them back.

use crate::config::document::DocumentUnmarshaller;
use crate::core::field::ShapeField;
use crate::domain::model;
use crate::utils::error::{ModelError, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A decoded shape whose concrete type is only known at runtime.
pub trait Inspectable: fmt::Display {
    fn hash_code(&self) -> i32;

    fn to_json(&self) -> Result<String>;
}

impl<T> Inspectable for T
where
    T: ShapeField + Serialize + fmt::Display,
{
    fn hash_code(&self) -> i32 {
        ShapeField::hash_code(self)
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

macro_rules! shape_registry {
    ($($shape:ident),* $(,)?) => {
        /// Shapes that can be decoded by name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
        pub enum Shape {
            $($shape),*
        }

        impl Shape {
            pub fn decode(
                &self,
                unmarshaller: &DocumentUnmarshaller,
                content: &str,
            ) -> Result<Box<dyn Inspectable>> {
                match self {
                    $(
                        Shape::$shape => Ok(Box::new(
                            unmarshaller.decode::<model::$shape>(content)?,
                        )),
                    )*
                }
            }
        }
    };
}

shape_registry! {
    RunInstancesRequest,
    RunInstancesResult,
    DescribeInstancesRequest,
    DescribeInstancesResult,
    DescribeImagesRequest,
    DescribeImagesResult,
    DescribeInstanceTypesRequest,
    DescribeInstanceTypesResult,
    CreateCapacityReservationRequest,
    CreateCapacityReservationResult,
    DescribeCapacityReservationsRequest,
    DescribeCapacityReservationsResult,
    CreateFlowLogsRequest,
    CreateFlowLogsResult,
    DescribeNetworkInterfacesRequest,
    DescribeNetworkInterfacesResult,
    DescribeReservedInstancesOfferingsRequest,
    DescribeReservedInstancesOfferingsResult,
    DescribeReservedInstancesRequest,
    DescribeReservedInstancesResult,
    DescribeRouteTablesRequest,
    DescribeRouteTablesResult,
    DescribeSpotInstanceRequestsRequest,
    DescribeSpotInstanceRequestsResult,
    DescribeFleetsRequest,
    DescribeFleetsResult,
    DescribeSpotFleetRequestsRequest,
    DescribeSpotFleetRequestsResult,
    CreateVolumeRequest,
    CreateVolumeResult,
    DescribeSecurityGroupsRequest,
    DescribeSecurityGroupsResult,
    Reservation,
    Instance,
    Image,
    InstanceTypeInfo,
    CapacityReservation,
    NetworkInterface,
    ReservedInstancesOffering,
    RouteTable,
    SpotInstanceRequest,
    FleetData,
    SpotFleetRequestConfig,
    Volume,
    SecurityGroup,
    BlockDeviceMapping,
    Filter,
    Tag,
}

impl Shape {
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse().map_err(|_| ModelError::UnknownShape {
            name: name.to_string(),
        })
    }

    pub fn names() -> Vec<String> {
        Self::iter().map(|shape| shape.to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// The shape's `Display` rendering.
    #[default]
    Display,
    /// Pretty-printed JSON keyed by wire names.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub shape: Shape,
    pub rendered: String,
    pub hash_code: i32,
}

/// Decodes a document as one shape and renders it in the chosen format.
pub struct Inspector {
    shape: Shape,
    output: OutputFormat,
}

impl Inspector {
    pub fn new(shape: Shape, output: OutputFormat) -> Self {
        Self { shape, output }
    }

    pub fn inspect_str(
        &self,
        unmarshaller: &DocumentUnmarshaller,
        content: &str,
    ) -> Result<Inspection> {
        let value = self.shape.decode(unmarshaller, content)?;
        tracing::debug!(shape = %self.shape, "Decoded shape");

        let rendered = match self.output {
            OutputFormat::Display => value.to_string(),
            OutputFormat::Json => value.to_json()?,
        };

        Ok(Inspection {
            shape: self.shape,
            rendered,
            hash_code: value.hash_code(),
        })
    }

    pub fn inspect_file<P: AsRef<Path>>(&self, path: P) -> Result<Inspection> {
        let path = path.as_ref();
        tracing::info!(shape = %self.shape, path = %path.display(), "Inspecting document");

        let (unmarshaller, content) = DocumentUnmarshaller::read_document(path)?;
        let inspection = self.inspect_str(&unmarshaller, &content)?;

        tracing::info!(
            shape = %self.shape,
            hash_code = inspection.hash_code,
            "Inspection complete"
        );
        Ok(inspection)
    }
}
