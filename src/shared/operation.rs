//! Coordinate operation, operation method and math transform interfaces, declared once for both hierarchies.

/// Declares the coordinate operation, operation method and math transform interfaces in the invoking module.
///
/// Sibling items (`IdentifiedObject` and the other families) are named
/// through `super`, so the same declarations bind to each hierarchy's own
/// traits.
macro_rules! operation_interfaces {
    () => {
        use std::sync::Arc;

        use super::{
            CoordinateReferenceSystem, IdentifiedObject, ParameterDescriptorGroup, ParameterValueGroup,
            TransformError, UnformattableObjectError,
        };
        use crate::base::Object;

        /// Transforms coordinate tuples from a source to a target space.
        pub trait MathTransform: Object {
            fn source_dimensions(&self) -> usize;
            fn target_dimensions(&self) -> usize;
            fn is_identity(&self) -> bool;

            /// Transforms a packed array of coordinate tuples.
            fn transform(&self, coordinates: &[f64]) -> Result<Vec<f64>, TransformError>;

            fn inverse(&self) -> Result<Arc<dyn MathTransform>, TransformError>;
            fn to_wkt(&self) -> Result<String, UnformattableObjectError>;

            fn as_one_dimensional(self: Arc<Self>) -> Option<Arc<dyn MathTransform1D>> {
                None
            }

            fn as_two_dimensional(self: Arc<Self>) -> Option<Arc<dyn MathTransform2D>> {
                None
            }
        }

        pub trait MathTransform1D: MathTransform {
            fn transform_value(&self, value: f64) -> Result<f64, TransformError>;
            fn derivative(&self, value: f64) -> Result<f64, TransformError>;
        }

        pub trait MathTransform2D: MathTransform {
            fn transform_point(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError>;
        }

        /// Algorithm used to perform a coordinate operation.
        pub trait OperationMethod: IdentifiedObject {
            fn formula(&self) -> Option<String>;
            fn source_dimensions(&self) -> Option<usize>;
            fn target_dimensions(&self) -> Option<usize>;
            fn parameters(&self) -> Arc<dyn ParameterDescriptorGroup>;
        }

        /// Change of coordinates from one CRS to another.
        pub trait CoordinateOperation: IdentifiedObject {
            fn source_crs(&self) -> Option<Arc<dyn CoordinateReferenceSystem>>;
            fn target_crs(&self) -> Option<Arc<dyn CoordinateReferenceSystem>>;
            fn operation_version(&self) -> Option<String>;
            fn scope(&self) -> Option<String>;
            fn math_transform(&self) -> Arc<dyn MathTransform>;

            fn as_single_operation(self: Arc<Self>) -> Option<Arc<dyn SingleOperation>> {
                None
            }

            fn as_conversion(self: Arc<Self>) -> Option<Arc<dyn Conversion>> {
                None
            }

            fn as_transformation(self: Arc<Self>) -> Option<Arc<dyn Transformation>> {
                None
            }

            fn as_pass_through(self: Arc<Self>) -> Option<Arc<dyn PassThroughOperation>> {
                None
            }

            fn as_concatenated(self: Arc<Self>) -> Option<Arc<dyn ConcatenatedOperation>> {
                None
            }
        }

        /// Operation with one method and one set of parameter values.
        pub trait SingleOperation: CoordinateOperation {
            fn method(&self) -> Arc<dyn OperationMethod>;
            fn parameter_values(&self) -> Arc<dyn ParameterValueGroup>;
        }

        pub trait Conversion: SingleOperation {}

        pub trait Transformation: SingleOperation {}

        /// Operation applied to a subset of the coordinates only.
        pub trait PassThroughOperation: SingleOperation {
            fn operation(&self) -> Arc<dyn SingleOperation>;
            fn modified_coordinates(&self) -> Vec<usize>;
        }

        /// Ordered sequence of single operations.
        pub trait ConcatenatedOperation: CoordinateOperation {
            fn operations(&self) -> Vec<Arc<dyn SingleOperation>>;
        }
    };
}
