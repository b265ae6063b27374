//! Family definitions, one macro per module.
//!
//! Both hierarchies share trait names and method signatures, so each family
//! is written once as `macro_rules! <family>_family { ($src => $dst, $facade) }`
//! and instantiated in `to_geoapi` and `to_opengis`. An instantiation expands
//! to:
//!
//! - blanket impls of every `$dst` trait of the family for `Wrapper<S>` where
//!   `S` implements the `$src` trait
//! - one `pub static` [`Dispatch`](crate::bridge::Dispatch) per family root
//! - one `$facade` impl per `$src` trait object
//!
//! Each instantiation lives in its own module and refers to sibling families
//! through `super::<family>`.

#[macro_use]
mod metadata;
#[macro_use]
mod referencing;
#[macro_use]
mod cs;
#[macro_use]
mod datum;
#[macro_use]
mod crs;
#[macro_use]
mod operation;
#[macro_use]
mod parameter;
#[macro_use]
mod factory;
