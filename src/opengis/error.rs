//! Failure types declared by the OpenGIS interfaces.

error_types!();
