//! Scoped names.

use std::fmt;

/// A name that is local to a scope, such as an alias `"EPSG:WGS 84"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericName {
    pub scope: Option<String>,
    pub tip: String,
}

impl GenericName {
    pub fn new(scope: Option<String>, tip: impl Into<String>) -> Self {
        Self {
            scope,
            tip: tip.into(),
        }
    }

    /// A name with no scope.
    pub fn local(tip: impl Into<String>) -> Self {
        Self::new(None, tip)
    }
}

impl fmt::Display for GenericName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "{scope}:{}", self.tip),
            None => f.write_str(&self.tip),
        }
    }
}
