//! Parameter values write through to the backing object.

use std::sync::Arc;

use geoapi_bridge::{geoapi, opengis};

use crate::helpers::opengis_fixtures::pole_rotation;

fn values() -> (Arc<dyn opengis::ParameterValueGroup>, Arc<dyn geoapi::ParameterValueGroup>) {
    let group: Arc<dyn opengis::ParameterValueGroup> = pole_rotation().values.clone();
    let adapted = geoapi(&group);
    (group, adapted)
}

#[test]
fn test_set_value_writes_through() {
    let (group, adapted) = values();
    let latitude = adapted
        .parameter("grid_north_pole_latitude")
        .expect("declared parameter");
    latitude
        .set_value(geoapi::Value::Double(39.25))
        .expect("value in range");

    let original = group
        .parameter("grid_north_pole_latitude")
        .expect("declared parameter");
    assert_eq!(original.value(), Some(opengis::Value::Double(39.25)));
    assert_eq!(latitude.double_value().expect("number"), 39.25);
}

#[test]
fn test_rejected_value_is_translated() {
    let (_, adapted) = values();
    let longitude = adapted
        .parameter("grid_north_pole_longitude")
        .expect("declared parameter");
    let error = longitude
        .set_value(geoapi::Value::Double(400.0))
        .expect_err("out of range");

    match &error {
        geoapi::ParameterError::InvalidValue { name, value, .. } => {
            assert_eq!(name, "grid_north_pole_longitude");
            assert_eq!(value, "400");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
    assert!(error.cause().is_some());
    assert_eq!(longitude.int_value().expect("default kept"), 0);
}

#[test]
fn test_unknown_parameter_is_not_found() {
    let (_, adapted) = values();
    let error = adapted.parameter("scale_factor").expect_err("undeclared");
    assert_eq!(error.parameter_name(), "scale_factor");
    assert!(matches!(error, geoapi::ParameterError::NotFound { .. }));
}

#[test]
fn test_values_keep_declaration_order() {
    let (_, adapted) = values();
    let names: Vec<String> = adapted
        .values()
        .iter()
        .map(|value| value.descriptor().name().code())
        .collect();
    assert_eq!(names, vec!["grid_north_pole_latitude", "grid_north_pole_longitude"]);
}

#[test]
fn test_descriptor_defaults_are_translated() {
    let (_, adapted) = values();
    let descriptor = adapted
        .descriptor()
        .as_descriptor_group()
        .expect("group descriptor")
        .descriptor("grid_north_pole_latitude")
        .expect("declared descriptor")
        .as_descriptor()
        .expect("single descriptor");
    assert_eq!(descriptor.default_value(), Some(geoapi::Value::Integer(90)));
    assert_eq!(descriptor.unit().as_deref(), Some("degree"));
}
