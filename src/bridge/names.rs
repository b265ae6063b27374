//! Alias translation between `"scope:tip"` strings and [`GenericName`]s.

use crate::geoapi::GenericName;

/// Parses an OpenGIS alias. Text before the first `:` is the scope.
pub fn generic_name(alias: &str) -> GenericName {
    match alias.split_once(':') {
        Some((scope, tip)) => GenericName::new(Some(scope.to_owned()), tip),
        None => GenericName::local(alias),
    }
}

/// Formats a GeoAPI alias the way OpenGIS stores it.
pub fn alias_text(name: &GenericName) -> String {
    name.to_string()
}
