//! Root of every identified referencing object.

use std::sync::Arc;

use super::{
    CoordinateOperation, CoordinateReferenceSystem, CoordinateSystem, CoordinateSystemAxis,
    Datum, Ellipsoid, GeneralParameterDescriptor, GenericName, OperationMethod, PrimeMeridian,
    ReferenceIdentifier, UnformattableObjectError,
};
use crate::base::Object;

/// Object with a name, aliases, identifiers and remarks.
///
/// At most one `as_*` method returns `Some` for a concrete object.
pub trait IdentifiedObject: Object {
    fn name(&self) -> Arc<dyn ReferenceIdentifier>;

    fn alias(&self) -> Vec<GenericName>;

    fn identifiers(&self) -> Vec<Arc<dyn ReferenceIdentifier>>;
    fn remarks(&self) -> Option<String>;
    fn to_wkt(&self) -> Result<String, UnformattableObjectError>;

    fn as_coordinate_reference_system(
        self: Arc<Self>,
    ) -> Option<Arc<dyn CoordinateReferenceSystem>> {
        None
    }

    fn as_coordinate_system(self: Arc<Self>) -> Option<Arc<dyn CoordinateSystem>> {
        None
    }

    fn as_coordinate_system_axis(self: Arc<Self>) -> Option<Arc<dyn CoordinateSystemAxis>> {
        None
    }

    fn as_datum(self: Arc<Self>) -> Option<Arc<dyn Datum>> {
        None
    }

    fn as_ellipsoid(self: Arc<Self>) -> Option<Arc<dyn Ellipsoid>> {
        None
    }

    fn as_prime_meridian(self: Arc<Self>) -> Option<Arc<dyn PrimeMeridian>> {
        None
    }

    fn as_coordinate_operation(self: Arc<Self>) -> Option<Arc<dyn CoordinateOperation>> {
        None
    }

    fn as_operation_method(self: Arc<Self>) -> Option<Arc<dyn OperationMethod>> {
        None
    }

    fn as_parameter_descriptor(self: Arc<Self>) -> Option<Arc<dyn GeneralParameterDescriptor>> {
        None
    }
}
