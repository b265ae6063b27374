//! Failure types declared by the GeoAPI interfaces.

error_types!();
