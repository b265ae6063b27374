//! The adapter layer.
//!
//! ## Structure
//!
//! ```text
//! facade      → geoapi() / opengis(), one ToGeoapi / ToOpengis impl per trait object
//!   ↓
//! to_geoapi   to_opengis   → one module per family and direction
//!   ↓            ↓
//! family      → the per-family wrapper impls and resolver tables, written once
//!               as macros over (source hierarchy => target hierarchy)
//!   ↓
//! dispatch    → Dispatch / SubtypeTable: pass-through, unwrap, most specific subtype
//! wrapper     → Wrapper<S, K>: identity, equality, hashing
//! collections, convert, errors, names → value translators
//! ```

#[macro_use]
mod macros;
#[macro_use]
mod family;

mod collections;
pub mod convert;
mod dispatch;
pub mod errors;
mod facade;
pub mod names;
mod wrapper;

pub mod to_geoapi;
pub mod to_opengis;

pub use collections::{lift_map, lift_set, lift_set_opt, lift_vec, translate_code, translate_codes};
pub use dispatch::{Dispatch, GENERIC, Resolution, Subtype, SubtypeTable};
pub use facade::{ToGeoapi, ToOpengis, geoapi, geoapi_opt, opengis, opengis_opt};
pub use wrapper::{
    DerivedEngineering, DerivedGeodetic, DerivedGeographic, DerivedTemporal, DerivedVertical,
    Plain, Wrapper,
};

pub(crate) use wrapper::narrow;
