//! The GeoAPI referencing interfaces.
//!
//! Same taxonomy as [`crate::opengis`], re-exported flat at the module root.
//! Aliases are [`GenericName`]s, citation dates are epoch based, and a
//! responsible party always has a role.

mod crs;
mod cs;
mod datum;
mod error;
mod factory;
mod metadata;
mod name;
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
pub use name::GenericName;
pub use operation::{
    ConcatenatedOperation, Conversion, CoordinateOperation, MathTransform, MathTransform1D,
    MathTransform2D, OperationMethod, PassThroughOperation, SingleOperation, Transformation,
};
pub use parameter::{
    GeneralParameterDescriptor, GeneralParameterValue, ParameterDescriptor,
    ParameterDescriptorGroup, ParameterValue, ParameterValueGroup, Value,
};
pub use referencing::IdentifiedObject;
