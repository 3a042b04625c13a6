use crate::core::request::WireRequest;
use crate::utils::error::Result;

/// Turns a populated request shape into its wire form.
///
/// Implementations read the shape only through its getters; absent fields
/// are left out of the wire form.
pub trait Marshaller<R: ?Sized> {
    fn marshall(&self, request: &R) -> Result<WireRequest>;
}

/// Builds a result shape from a response payload.
pub trait Unmarshaller<T> {
    fn unmarshall(&self, payload: &[u8]) -> Result<T>;
}
