//! Datum, ellipsoid and prime meridian interfaces.

datum_interfaces!();
