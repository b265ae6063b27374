//! Minimal GeoAPI implementations, for adapting in the OpenGIS direction.

use std::fmt;
use std::sync::Arc;

use geoapi_bridge::Object;
use geoapi_bridge::geoapi::{
    self, FactoryError, GenericName, ObjectKind, Role, TransformError,
    UnformattableObjectError, Value,
};
use indexmap::IndexSet;

use crate::helpers::dual::DualCitation;

// ============================================================================
// Metadata
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    pub code: String,
    pub code_space: String,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.code_space, self.code)
    }
}

impl Object for Code {}

impl geoapi::Identifier for Code {
    fn code(&self) -> String {
        self.code.clone()
    }

    fn authority(&self) -> Option<Arc<dyn geoapi::Citation>> {
        None
    }

    fn as_reference_identifier(self: Arc<Self>) -> Option<Arc<dyn geoapi::ReferenceIdentifier>> {
        Some(self)
    }
}

impl geoapi::ReferenceIdentifier for Code {
    fn code_space(&self) -> Option<String> {
        Some(self.code_space.clone())
    }

    fn version(&self) -> Option<String> {
        Some("9.8".to_string())
    }
}

pub fn code(code: &str) -> Arc<dyn geoapi::ReferenceIdentifier> {
    Arc::new(Code {
        code: code.to_string(),
        code_space: "EPSG".to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Organisation {
    pub name: String,
    pub role: Role,
}

impl fmt::Display for Organisation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Object for Organisation {}

impl geoapi::ResponsibleParty for Organisation {
    fn individual_name(&self) -> Option<String> {
        None
    }

    fn organisation_name(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn position_name(&self) -> Option<String> {
        None
    }

    fn address(&self) -> Option<Arc<dyn geoapi::Address>> {
        None
    }

    fn role(&self) -> Role {
        self.role.clone()
    }
}

// ============================================================================
// Datums
// ============================================================================

/// The GRS 1980 ellipsoid, with scoped and local aliases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grs80;

impl fmt::Display for Grs80 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GRS 1980")
    }
}

impl Object for Grs80 {}

impl geoapi::IdentifiedObject for Grs80 {
    fn name(&self) -> Arc<dyn geoapi::ReferenceIdentifier> {
        code("GRS 1980")
    }

    fn alias(&self) -> Vec<GenericName> {
        vec![
            GenericName::new(Some("EPSG".to_string()), "GRS80"),
            GenericName::local("International 1979"),
        ]
    }

    fn identifiers(&self) -> Vec<Arc<dyn geoapi::ReferenceIdentifier>> {
        vec![code("7019")]
    }

    fn remarks(&self) -> Option<String> {
        Some("Adopted by IUGG 1979 Canberra.".to_string())
    }

    fn to_wkt(&self) -> Result<String, UnformattableObjectError> {
        Ok("SPHEROID[\"GRS 1980\",6378137,298.257222101]".to_string())
    }

    fn as_ellipsoid(self: Arc<Self>) -> Option<Arc<dyn geoapi::Ellipsoid>> {
        Some(self)
    }
}

impl geoapi::Ellipsoid for Grs80 {
    fn axis_unit(&self) -> String {
        "metre".to_string()
    }

    fn semi_major_axis(&self) -> f64 {
        6_378_137.0
    }

    fn semi_minor_axis(&self) -> f64 {
        6_356_752.314_140
    }

    fn inverse_flattening(&self) -> f64 {
        298.257_222_101
    }

    fn is_ivf_definitive(&self) -> bool {
        true
    }

    fn is_sphere(&self) -> bool {
        false
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Multiplication by a constant factor, reported as non-invertible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scale {
    pub factor: i64,
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scale({})", self.factor)
    }
}

impl Object for Scale {}

impl geoapi::MathTransform for Scale {
    fn source_dimensions(&self) -> usize {
        1
    }

    fn target_dimensions(&self) -> usize {
        1
    }

    fn is_identity(&self) -> bool {
        self.factor == 1
    }

    fn transform(&self, coordinates: &[f64]) -> Result<Vec<f64>, TransformError> {
        Ok(coordinates.iter().map(|x| x * self.factor as f64).collect())
    }

    fn inverse(&self) -> Result<Arc<dyn geoapi::MathTransform>, TransformError> {
        Err(TransformError::noninvertible("scale factor is not invertible"))
    }

    fn to_wkt(&self) -> Result<String, UnformattableObjectError> {
        Ok(format!("PARAM_MT[\"Affine\",PARAMETER[\"elt_0_0\",{}]]", self.factor))
    }

    fn as_one_dimensional(self: Arc<Self>) -> Option<Arc<dyn geoapi::MathTransform1D>> {
        Some(self)
    }
}

impl geoapi::MathTransform1D for Scale {
    fn transform_value(&self, value: f64) -> Result<f64, TransformError> {
        Ok(value * self.factor as f64)
    }

    fn derivative(&self, _value: f64) -> Result<f64, TransformError> {
        Ok(self.factor as f64)
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// A bounded scale-factor descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaleFactor;

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("scale_factor")
    }
}

impl Object for ScaleFactor {}

impl geoapi::IdentifiedObject for ScaleFactor {
    fn name(&self) -> Arc<dyn geoapi::ReferenceIdentifier> {
        code("scale_factor")
    }

    fn alias(&self) -> Vec<GenericName> {
        vec![GenericName::new(Some("OGC".to_string()), "scale_factor")]
    }

    fn identifiers(&self) -> Vec<Arc<dyn geoapi::ReferenceIdentifier>> {
        vec![code("8805")]
    }

    fn remarks(&self) -> Option<String> {
        None
    }

    fn to_wkt(&self) -> Result<String, UnformattableObjectError> {
        Err(UnformattableObjectError::new("descriptors have no WKT form"))
    }

    fn as_parameter_descriptor(self: Arc<Self>) -> Option<Arc<dyn geoapi::GeneralParameterDescriptor>> {
        Some(self)
    }
}

impl geoapi::GeneralParameterDescriptor for ScaleFactor {
    fn minimum_occurs(&self) -> usize {
        0
    }

    fn maximum_occurs(&self) -> usize {
        1
    }

    fn as_descriptor(self: Arc<Self>) -> Option<Arc<dyn geoapi::ParameterDescriptor>> {
        Some(self)
    }
}

impl geoapi::ParameterDescriptor for ScaleFactor {
    fn default_value(&self) -> Option<Value> {
        Some(Value::Double(1.0))
    }

    fn minimum_value(&self) -> Option<f64> {
        Some(0.0)
    }

    fn maximum_value(&self) -> Option<f64> {
        None
    }

    fn unit(&self) -> Option<String> {
        Some("unity".to_string())
    }
}

// ============================================================================
// Factories
// ============================================================================

/// A datum authority factory that knows the GRS 1980 ellipsoid only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EllipsoidRegistry;

impl EllipsoidRegistry {
    fn unknown(code: &str) -> FactoryError {
        FactoryError::no_such_authority_code("EPSG", code, format!("no datum object for code {code}"))
    }
}

impl fmt::Display for EllipsoidRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ellipsoid registry")
    }
}

impl Object for EllipsoidRegistry {}

impl geoapi::AuthorityFactory for EllipsoidRegistry {
    fn vendor(&self) -> Arc<dyn geoapi::Citation> {
        let vendor: Arc<dyn geoapi::Citation> = DualCitation::new("IOGP");
        vendor
    }

    fn authority(&self) -> Arc<dyn geoapi::Citation> {
        let authority: Arc<dyn geoapi::Citation> = DualCitation::new("EPSG");
        authority
    }

    fn authority_codes(&self, kind: ObjectKind) -> Result<IndexSet<String>, FactoryError> {
        match kind {
            ObjectKind::Any | ObjectKind::Ellipsoid => Ok(["7019".to_string()].into_iter().collect()),
            _ => Ok(IndexSet::new()),
        }
    }

    fn description_text(&self, code: &str) -> Result<String, FactoryError> {
        match code {
            "7019" => Ok("GRS 1980".to_string()),
            _ => Err(Self::unknown(code)),
        }
    }

    fn create_object(&self, code: &str) -> Result<Arc<dyn geoapi::IdentifiedObject>, FactoryError> {
        let ellipsoid: Arc<dyn geoapi::IdentifiedObject> = match code {
            "7019" => Arc::new(Grs80),
            _ => return Err(Self::unknown(code)),
        };
        Ok(ellipsoid)
    }

    fn as_datum_factory(self: Arc<Self>) -> Option<Arc<dyn geoapi::DatumAuthorityFactory>> {
        Some(self)
    }
}

impl geoapi::DatumAuthorityFactory for EllipsoidRegistry {
    fn create_datum(&self, code: &str) -> Result<Arc<dyn geoapi::Datum>, FactoryError> {
        Err(Self::unknown(code))
    }

    fn create_geodetic_datum(&self, code: &str) -> Result<Arc<dyn geoapi::GeodeticDatum>, FactoryError> {
        Err(Self::unknown(code))
    }

    fn create_ellipsoid(&self, code: &str) -> Result<Arc<dyn geoapi::Ellipsoid>, FactoryError> {
        match code {
            "7019" => Ok(Arc::new(Grs80)),
            _ => Err(Self::unknown(code)),
        }
    }

    fn create_prime_meridian(&self, code: &str) -> Result<Arc<dyn geoapi::PrimeMeridian>, FactoryError> {
        Err(Self::unknown(code))
    }
}

pub fn registry() -> Arc<dyn geoapi::AuthorityFactory> {
    Arc::new(EllipsoidRegistry)
}
