//! # geoapi-bridge
//!
//! Delegating adapters between two parallel referencing interface hierarchies:
//! the legacy [`opengis`] interfaces and the [`geoapi`] interfaces.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! bridge    → Resolvers, wrappers, translators, facade (geoapi() / opengis())
//!   ↓
//! opengis   geoapi   → The two independent domain hierarchies
//!   ↓         ↓
//! shared    → Declarations both hierarchies instantiate
//!   ↓
//! base      → Object root, dynamic equality, native views, code lists
//! ```
//!
//! A caller holding an `Arc<dyn opengis::CoordinateReferenceSystem>` passes it to
//! [`geoapi()`] and gets an `Arc<dyn geoapi::CoordinateReferenceSystem>` that
//! forwards every call to the original. Adapting the result back with
//! [`opengis()`] returns the original object, never a wrapper of a wrapper.

// ============================================================================
// MODULES (dependency order: base → shared → opengis/geoapi → bridge)
// ============================================================================

/// Hierarchy-neutral root traits and code lists
#[macro_use]
pub mod base;

/// Interface declarations shared in shape by both hierarchies
#[macro_use]
mod shared;

/// Hierarchy A: legacy OpenGIS interfaces
pub mod opengis;

/// Hierarchy B: GeoAPI interfaces
pub mod geoapi;

/// Adapter layer between the two hierarchies
pub mod bridge;

// Re-export the facade
pub use bridge::{ToGeoapi, ToOpengis, geoapi, geoapi_opt, opengis, opengis_opt};

// Re-export foundation types
pub use base::{CodeList, DynObject, Object, View};
