//! Translators for plain values: parameter values, object kinds, factory
//! property maps and responsible-party roles.
//!
//! Like [`errors`](super::errors), each submodule is named after the target
//! hierarchy.

macro_rules! value_translators {
    ($src:ident => $dst:ident) => {
        pub fn value(value: $crate::$src::Value) -> $crate::$dst::Value {
            match value {
                $crate::$src::Value::Boolean(b) => $crate::$dst::Value::Boolean(b),
                $crate::$src::Value::Integer(n) => $crate::$dst::Value::Integer(n),
                $crate::$src::Value::Double(x) => $crate::$dst::Value::Double(x),
                $crate::$src::Value::Doubles(xs) => $crate::$dst::Value::Doubles(xs),
                $crate::$src::Value::Text(s) => $crate::$dst::Value::Text(s),
            }
        }

        pub fn object_kind(kind: $crate::$src::ObjectKind) -> $crate::$dst::ObjectKind {
            match kind {
                $crate::$src::ObjectKind::Any => $crate::$dst::ObjectKind::Any,
                $crate::$src::ObjectKind::CoordinateReferenceSystem => {
                    $crate::$dst::ObjectKind::CoordinateReferenceSystem
                }
                $crate::$src::ObjectKind::CoordinateSystem => $crate::$dst::ObjectKind::CoordinateSystem,
                $crate::$src::ObjectKind::CoordinateSystemAxis => {
                    $crate::$dst::ObjectKind::CoordinateSystemAxis
                }
                $crate::$src::ObjectKind::Datum => $crate::$dst::ObjectKind::Datum,
                $crate::$src::ObjectKind::Ellipsoid => $crate::$dst::ObjectKind::Ellipsoid,
                $crate::$src::ObjectKind::PrimeMeridian => $crate::$dst::ObjectKind::PrimeMeridian,
                $crate::$src::ObjectKind::CoordinateOperation => {
                    $crate::$dst::ObjectKind::CoordinateOperation
                }
            }
        }

        pub fn property_value(value: &$crate::$src::PropertyValue) -> $crate::$dst::PropertyValue {
            match value {
                $crate::$src::PropertyValue::Text(text) => $crate::$dst::PropertyValue::Text(text.clone()),
                $crate::$src::PropertyValue::Identifier(identifier) => {
                    $crate::$dst::PropertyValue::Identifier($crate::bridge::$dst(identifier))
                }
                $crate::$src::PropertyValue::Citation(citation) => {
                    $crate::$dst::PropertyValue::Citation($crate::bridge::$dst(citation))
                }
            }
        }

        /// Translates a factory property map; keys are kept as they are.
        pub fn properties(properties: &$crate::$src::Properties) -> $crate::$dst::Properties {
            $crate::bridge::lift_map(properties, String::clone, property_value)
        }
    };
}

pub mod geoapi {
    use crate::bridge::wrapper::unsupported;
    use crate::{geoapi, opengis};

    value_translators!(opengis => geoapi);

    /// The role is mandatory in GeoAPI; a party without one cannot be exposed.
    pub fn role(role: Option<opengis::Role>) -> geoapi::Role {
        match role {
            Some(role) => crate::bridge::translate_code(&role),
            None => unsupported("responsible party", "role"),
        }
    }
}

pub mod opengis {
    use crate::{geoapi, opengis};

    value_translators!(geoapi => opengis);

    pub fn role(role: geoapi::Role) -> Option<opengis::Role> {
        Some(crate::bridge::translate_code(&role))
    }
}
