//! Exception translators.
//!
//! One translator per error family and direction. Each keeps the message,
//! copies variant fields (authority, code, parameter name, rejected value)
//! and sets the original error as the cause, so `source()` walks back across
//! the boundary. Translators are named after the target hierarchy:
//! `errors::geoapi::factory` turns an `opengis::FactoryError` into a
//! `geoapi::FactoryError`.

macro_rules! error_translators {
    ($src:ident => $dst:ident) => {
        pub mod $dst {
            use std::sync::Arc;

            use tracing::debug;

            fn chained<E>(error: &E) -> Option<$crate::$dst::Cause>
            where
                E: std::error::Error + Clone + Send + Sync + 'static,
            {
                let cause: $crate::$dst::Cause = Arc::new(error.clone());
                Some(cause)
            }

            pub fn factory(error: $crate::$src::FactoryError) -> $crate::$dst::FactoryError {
                debug!(reason = error.message(), "translating factory error");
                let cause = chained(&error);
                match error {
                    $crate::$src::FactoryError::Failed { message, .. } => {
                        $crate::$dst::FactoryError::Failed { message, cause }
                    }
                    $crate::$src::FactoryError::NoSuchAuthorityCode {
                        message,
                        authority,
                        code,
                        ..
                    } => $crate::$dst::FactoryError::NoSuchAuthorityCode {
                        message,
                        authority,
                        code,
                        cause,
                    },
                }
            }

            pub fn transform(error: $crate::$src::TransformError) -> $crate::$dst::TransformError {
                debug!(reason = error.message(), "translating transform error");
                let cause = chained(&error);
                match error {
                    $crate::$src::TransformError::Failed { message, .. } => {
                        $crate::$dst::TransformError::Failed { message, cause }
                    }
                    $crate::$src::TransformError::Noninvertible { message, .. } => {
                        $crate::$dst::TransformError::Noninvertible { message, cause }
                    }
                }
            }

            pub fn parameter(error: $crate::$src::ParameterError) -> $crate::$dst::ParameterError {
                debug!(
                    reason = error.message(),
                    parameter = error.parameter_name(),
                    "translating parameter error"
                );
                let cause = chained(&error);
                match error {
                    $crate::$src::ParameterError::NotFound { message, name, .. } => {
                        $crate::$dst::ParameterError::NotFound { message, name, cause }
                    }
                    $crate::$src::ParameterError::InvalidValue {
                        message,
                        name,
                        value,
                        ..
                    } => $crate::$dst::ParameterError::InvalidValue {
                        message,
                        name,
                        value,
                        cause,
                    },
                    $crate::$src::ParameterError::InvalidType { message, name, .. } => {
                        $crate::$dst::ParameterError::InvalidType { message, name, cause }
                    }
                }
            }

            pub fn unformattable(
                error: $crate::$src::UnformattableObjectError,
            ) -> $crate::$dst::UnformattableObjectError {
                debug!(reason = %error.message, "translating unformattable object error");
                let cause = chained(&error);
                $crate::$dst::UnformattableObjectError {
                    message: error.message,
                    cause,
                }
            }
        }
    };
}

error_translators!(opengis => geoapi);
error_translators!(geoapi => opengis);
