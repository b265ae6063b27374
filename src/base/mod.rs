//! Foundation types shared by both referencing hierarchies.
//!
//! This module provides the hierarchy-neutral root every domain trait builds on:
//! - [`DynObject`] - Type-erased equality, hashing and `Any` access
//! - [`Object`] - Root of every domain trait, with the [`Object::native_view`] hook
//! - [`View`] - A trait object handed out by a type that natively implements a
//!   trait from another hierarchy
//! - [`CodeList`] - Open enumerations matched by name, declared with [`code_list!`]
//!
//! This module has NO dependencies on other modules of this crate.

#[macro_use]
mod code_list;
mod object;

pub use code_list::CodeList;
pub use object::{DynObject, Object, View, native_view};
