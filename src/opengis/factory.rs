//! Authority factories and the CRS object factory.

factory_interfaces!();
