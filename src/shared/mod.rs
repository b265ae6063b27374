//! Interface declarations with the same shape in both hierarchies.
//!
//! Each module holds one `macro_rules!` that `opengis` and `geoapi` invoke
//! in their own module of the same name. The families whose shapes differ
//! (metadata, referencing, parameter) are written out in each hierarchy.

#[macro_use]
mod crs;
#[macro_use]
mod cs;
#[macro_use]
mod datum;
#[macro_use]
mod error;
#[macro_use]
mod factory;
#[macro_use]
mod operation;
