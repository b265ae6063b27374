//! Coordinate operation, operation method and math transform interfaces.

operation_interfaces!();
