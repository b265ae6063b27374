//! Failure types, declared once for both hierarchies.
//!
//! `opengis` and `geoapi` each get their own error types, so a failure of one
//! hierarchy is never mistaken for one of the other. The bridge translates
//! between the two.

/// Declares `Cause`, `FactoryError`, `TransformError`, `ParameterError` and
/// `UnformattableObjectError` in the invoking module.
macro_rules! error_types {
    () => {
        /// The underlying failure an error was raised for.
        pub type Cause = std::sync::Arc<dyn std::error::Error + Send + Sync>;

        /// Failure of a factory method.
        #[derive(Debug, Clone, ::thiserror::Error)]
        pub enum FactoryError {
            /// Generic factory failure.
            #[error("{message}")]
            Failed {
                message: String,
                #[source]
                cause: Option<Cause>,
            },

            /// The authority does not know the requested code.
            #[error("{message}")]
            NoSuchAuthorityCode {
                message: String,
                /// Title of the authority that was queried (e.g. `"EPSG"`).
                authority: String,
                /// The code that was not found.
                code: String,
                #[source]
                cause: Option<Cause>,
            },
        }

        impl FactoryError {
            /// Create a generic factory failure.
            pub fn failed(message: impl Into<String>) -> Self {
                Self::Failed {
                    message: message.into(),
                    cause: None,
                }
            }

            /// Create an unknown-code failure.
            pub fn no_such_authority_code(
                authority: impl Into<String>,
                code: impl Into<String>,
                message: impl Into<String>,
            ) -> Self {
                Self::NoSuchAuthorityCode {
                    message: message.into(),
                    authority: authority.into(),
                    code: code.into(),
                    cause: None,
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    Self::Failed { message, .. } | Self::NoSuchAuthorityCode { message, .. } => message,
                }
            }

            pub fn cause(&self) -> Option<&Cause> {
                match self {
                    Self::Failed { cause, .. } | Self::NoSuchAuthorityCode { cause, .. } => cause.as_ref(),
                }
            }

            /// The queried authority, for unknown-code failures.
            pub fn authority(&self) -> Option<&str> {
                match self {
                    Self::NoSuchAuthorityCode { authority, .. } => Some(authority),
                    Self::Failed { .. } => None,
                }
            }

            /// The offending code, for unknown-code failures.
            pub fn code(&self) -> Option<&str> {
                match self {
                    Self::NoSuchAuthorityCode { code, .. } => Some(code),
                    Self::Failed { .. } => None,
                }
            }
        }

        /// Failure of a math transform.
        #[derive(Debug, Clone, ::thiserror::Error)]
        pub enum TransformError {
            #[error("{message}")]
            Failed {
                message: String,
                #[source]
                cause: Option<Cause>,
            },

            /// The transform has no inverse.
            #[error("{message}")]
            Noninvertible {
                message: String,
                #[source]
                cause: Option<Cause>,
            },
        }

        impl TransformError {
            pub fn failed(message: impl Into<String>) -> Self {
                Self::Failed {
                    message: message.into(),
                    cause: None,
                }
            }

            pub fn noninvertible(message: impl Into<String>) -> Self {
                Self::Noninvertible {
                    message: message.into(),
                    cause: None,
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    Self::Failed { message, .. } | Self::Noninvertible { message, .. } => message,
                }
            }

            pub fn cause(&self) -> Option<&Cause> {
                match self {
                    Self::Failed { cause, .. } | Self::Noninvertible { cause, .. } => cause.as_ref(),
                }
            }
        }

        /// Failure of a parameter lookup or assignment.
        #[derive(Debug, Clone, ::thiserror::Error)]
        pub enum ParameterError {
            /// No parameter with the given name.
            #[error("{message}")]
            NotFound {
                message: String,
                name: String,
                #[source]
                cause: Option<Cause>,
            },

            /// The value is outside the parameter's domain.
            #[error("{message}")]
            InvalidValue {
                message: String,
                name: String,
                /// Textual form of the rejected value.
                value: String,
                #[source]
                cause: Option<Cause>,
            },

            /// The value cannot be read as the requested type.
            #[error("{message}")]
            InvalidType {
                message: String,
                name: String,
                #[source]
                cause: Option<Cause>,
            },
        }

        impl ParameterError {
            pub fn not_found(name: impl Into<String>) -> Self {
                let name = name.into();
                Self::NotFound {
                    message: format!("No parameter named \"{name}\""),
                    name,
                    cause: None,
                }
            }

            pub fn invalid_value(name: impl Into<String>, value: impl Into<String>) -> Self {
                let name = name.into();
                let value = value.into();
                Self::InvalidValue {
                    message: format!("Illegal value {value} for parameter \"{name}\""),
                    name,
                    value,
                    cause: None,
                }
            }

            pub fn invalid_type(name: impl Into<String>, message: impl Into<String>) -> Self {
                Self::InvalidType {
                    message: message.into(),
                    name: name.into(),
                    cause: None,
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    Self::NotFound { message, .. }
                    | Self::InvalidValue { message, .. }
                    | Self::InvalidType { message, .. } => message,
                }
            }

            /// Name of the parameter involved.
            pub fn parameter_name(&self) -> &str {
                match self {
                    Self::NotFound { name, .. }
                    | Self::InvalidValue { name, .. }
                    | Self::InvalidType { name, .. } => name,
                }
            }

            pub fn cause(&self) -> Option<&Cause> {
                match self {
                    Self::NotFound { cause, .. }
                    | Self::InvalidValue { cause, .. }
                    | Self::InvalidType { cause, .. } => cause.as_ref(),
                }
            }
        }

        /// The object cannot be formatted as Well-Known Text.
        #[derive(Debug, Clone, ::thiserror::Error)]
        #[error("{message}")]
        pub struct UnformattableObjectError {
            pub message: String,
            #[source]
            pub cause: Option<Cause>,
        }

        impl UnformattableObjectError {
            pub fn new(message: impl Into<String>) -> Self {
                Self {
                    message: message.into(),
                    cause: None,
                }
            }
        }
    };
}
