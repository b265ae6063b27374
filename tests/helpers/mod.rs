pub mod dual;
pub mod geoapi_fixtures;
