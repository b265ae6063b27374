//! Coordinate system and axis interfaces.

cs_interfaces!();
