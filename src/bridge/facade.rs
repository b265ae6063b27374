//! Public entry points.
//!
//! [`geoapi`] and [`opengis`] are statically typed over every family: the
//! argument's trait object type picks the family, and the result is the
//! matching trait object of the other hierarchy.
//!
//! ```ignore
//! let crs: Arc<dyn opengis::GeographicCrs> = authority.create_geographic_crs("4326")?;
//! let adapted: Arc<dyn geoapi::GeographicCrs> = geoapi(&crs);
//! let back: Arc<dyn opengis::GeographicCrs> = opengis(&adapted);
//! assert!(Arc::ptr_eq(&crs, &back));
//! ```

use std::sync::Arc;

use crate::base::Object;

/// An OpenGIS trait object that can be exposed as GeoAPI.
pub trait ToGeoapi: Object {
    type Target: ?Sized + Object;

    fn adapt(object: &Arc<Self>) -> Arc<Self::Target>;
}

/// A GeoAPI trait object that can be exposed as OpenGIS.
pub trait ToOpengis: Object {
    type Target: ?Sized + Object;

    fn adapt(object: &Arc<Self>) -> Arc<Self::Target>;
}

/// Exposes an OpenGIS object through the matching GeoAPI interface.
pub fn geoapi<S: ?Sized + ToGeoapi>(object: &Arc<S>) -> Arc<S::Target> {
    S::adapt(object)
}

/// [`geoapi`] over an optional object.
pub fn geoapi_opt<S: ?Sized + ToGeoapi>(object: Option<&Arc<S>>) -> Option<Arc<S::Target>> {
    object.map(S::adapt)
}

/// Exposes a GeoAPI object through the matching OpenGIS interface.
pub fn opengis<S: ?Sized + ToOpengis>(object: &Arc<S>) -> Arc<S::Target> {
    S::adapt(object)
}

/// [`opengis`] over an optional object.
pub fn opengis_opt<S: ?Sized + ToOpengis>(object: Option<&Arc<S>>) -> Option<Arc<S::Target>> {
    object.map(S::adapt)
}
