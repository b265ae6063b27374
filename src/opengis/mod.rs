//! The OpenGIS referencing interfaces.
//!
//! Every trait in this module is re-exported at the module root, so callers
//! write `opengis::GeographicCrs` rather than `opengis::crs::GeographicCrs`.

mod crs;
mod cs;
mod datum;
mod error;
mod factory;
mod metadata;
mod operation;
mod parameter;
mod referencing;

pub use crs::{
    CompoundCrs, CoordinateReferenceSystem, DerivedCrs, EngineeringCrs, GeocentricCrs,
    GeodeticCrs, GeographicCrs, ImageCrs, ProjectedCrs, SingleCrs, TemporalCrs, VerticalCrs,
};
pub use cs::{
    AffineCs, AxisDirection, CartesianCs, CoordinateSystem, CoordinateSystemAxis, CylindricalCs,
    EllipsoidalCs, LinearCs, PolarCs, RangeMeaning, SphericalCs, TimeCs, UserDefinedCs,
    VerticalCs,
};
pub use datum::{
    Datum, Ellipsoid, EngineeringDatum, GeodeticDatum, ImageDatum, PixelInCell, PrimeMeridian,
    TemporalDatum, VerticalDatum, VerticalDatumType,
};
pub use error::{Cause, FactoryError, ParameterError, TransformError, UnformattableObjectError};
pub use factory::{
    AuthorityFactory, CoordinateOperationAuthorityFactory, CrsAuthorityFactory, CrsFactory,
    CsAuthorityFactory, DatumAuthorityFactory, ObjectKind, Properties, PropertyValue,
};
pub use metadata::{
    Address, Citation, CitationDate, DateType, Identifier, PresentationForm, ReferenceIdentifier,
    ResponsibleParty, Role,
};
pub use operation::{
    ConcatenatedOperation, Conversion, CoordinateOperation, MathTransform, MathTransform1D,
    MathTransform2D, OperationMethod, PassThroughOperation, SingleOperation, Transformation,
};
pub use parameter::{
    GeneralParameterDescriptor, GeneralParameterValue, ParameterDescriptor,
    ParameterDescriptorGroup, ParameterValue, ParameterValueGroup, Value,
};
pub use referencing::IdentifiedObject;
