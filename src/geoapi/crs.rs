//! Coordinate reference system interfaces.

crs_interfaces!();
