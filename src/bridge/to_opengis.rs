//! GeoAPI to OpenGIS.

pub mod metadata {
    metadata_family!(geoapi => opengis, ToOpengis, role: Option<crate::opengis::Role>);
}

pub mod referencing {
    referencing_family!(
        geoapi => opengis,
        ToOpengis,
        alias: String,
        crate::bridge::names::alias_text
    );
}

pub mod cs {
    cs_family!(geoapi => opengis, ToOpengis);
}

pub mod datum {
    datum_family!(geoapi => opengis, ToOpengis);
}

pub mod crs {
    crs_family!(geoapi => opengis, ToOpengis);
}

pub mod operation {
    operation_family!(geoapi => opengis, ToOpengis);
}

pub mod parameter {
    parameter_family!(geoapi => opengis, ToOpengis);
}

pub mod factory {
    factory_family!(geoapi => opengis, ToOpengis);
}
