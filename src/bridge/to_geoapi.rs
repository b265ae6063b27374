//! OpenGIS to GeoAPI.
//!
//! One module per family. Each exposes the family's [`Dispatch`](crate::bridge::Dispatch)
//! statics, which tests and diagnostics use to see how an object resolves.

pub mod metadata {
    metadata_family!(opengis => geoapi, ToGeoapi, role: crate::geoapi::Role);
}

pub mod referencing {
    referencing_family!(
        opengis => geoapi,
        ToGeoapi,
        alias: crate::geoapi::GenericName,
        crate::bridge::names::generic_name
    );
}

pub mod cs {
    cs_family!(opengis => geoapi, ToGeoapi);
}

pub mod datum {
    datum_family!(opengis => geoapi, ToGeoapi);
}

pub mod crs {
    crs_family!(opengis => geoapi, ToGeoapi);
}

pub mod operation {
    operation_family!(opengis => geoapi, ToGeoapi);
}

pub mod parameter {
    parameter_family!(opengis => geoapi, ToGeoapi);
}

pub mod factory {
    factory_family!(opengis => geoapi, ToGeoapi);
}
