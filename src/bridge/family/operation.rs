//! Math transform, operation method and coordinate operation families.

macro_rules! operation_family {
    ($src:ident => $dst:ident, $facade:ident) => {
        use std::sync::Arc;

        use $crate::bridge::errors::$dst as errors;
        use $crate::bridge::{$facade, Dispatch, SubtypeTable, Wrapper, lift_vec};
        use $crate::{$dst, $src};

        // ====================================================================
        // Math transform
        // ====================================================================

        impl<S: ?Sized + $src::MathTransform> $dst::MathTransform for Wrapper<S> {
            fn source_dimensions(&self) -> usize {
                self.backing().source_dimensions()
            }

            fn target_dimensions(&self) -> usize {
                self.backing().target_dimensions()
            }

            fn is_identity(&self) -> bool {
                self.backing().is_identity()
            }

            fn transform(&self, coordinates: &[f64]) -> Result<Vec<f64>, $dst::TransformError> {
                self.backing().transform(coordinates).map_err(errors::transform)
            }

            fn inverse(&self) -> Result<Arc<dyn $dst::MathTransform>, $dst::TransformError> {
                let inverse = self.backing().inverse().map_err(errors::transform)?;
                Ok($dst(&inverse))
            }

            fn to_wkt(&self) -> Result<String, $dst::UnformattableObjectError> {
                self.backing().to_wkt().map_err(errors::unformattable)
            }

            fn as_one_dimensional(self: Arc<Self>) -> Option<Arc<dyn $dst::MathTransform1D>> {
                forward_facet!(self.as_one_dimensional)
            }

            fn as_two_dimensional(self: Arc<Self>) -> Option<Arc<dyn $dst::MathTransform2D>> {
                forward_facet!(self.as_two_dimensional)
            }
        }

        impl<S: ?Sized + $src::MathTransform1D> $dst::MathTransform1D for Wrapper<S> {
            fn transform_value(&self, value: f64) -> Result<f64, $dst::TransformError> {
                self.backing().transform_value(value).map_err(errors::transform)
            }

            fn derivative(&self, value: f64) -> Result<f64, $dst::TransformError> {
                self.backing().derivative(value).map_err(errors::transform)
            }
        }

        impl<S: ?Sized + $src::MathTransform2D> $dst::MathTransform2D for Wrapper<S> {
            fn transform_point(&self, x: f64, y: f64) -> Result<(f64, f64), $dst::TransformError> {
                self.backing().transform_point(x, y).map_err(errors::transform)
            }
        }

        pub static MATH_TRANSFORM: Dispatch<dyn $src::MathTransform, dyn $dst::MathTransform> =
            Dispatch {
                family: "math transform",
                unwrap: unwrap_wrappers!(
                    dyn $dst::MathTransform:
                    Wrapper<dyn $dst::MathTransform>,
                    Wrapper<dyn $dst::MathTransform1D>,
                    Wrapper<dyn $dst::MathTransform2D>,
                ),
                table: SubtypeTable {
                    subtypes: &[
                        subtype!(dyn $src::MathTransform => dyn $dst::MathTransform, "one-dimensional",
                            |transform| Arc::clone(transform).as_one_dimensional().map(Wrapper::wrap)),
                        subtype!(dyn $src::MathTransform => dyn $dst::MathTransform, "two-dimensional",
                            |transform| Arc::clone(transform).as_two_dimensional().map(Wrapper::wrap)),
                    ],
                    generic: plain_wrapper!(dyn $src::MathTransform => dyn $dst::MathTransform),
                },
            };

        facade!($facade: dyn $src::MathTransform => dyn $dst::MathTransform, MATH_TRANSFORM);
        facade!($facade: dyn $src::MathTransform1D => dyn $dst::MathTransform1D,
            via dyn $src::MathTransform, MATH_TRANSFORM, as_one_dimensional);
        facade!($facade: dyn $src::MathTransform2D => dyn $dst::MathTransform2D,
            via dyn $src::MathTransform, MATH_TRANSFORM, as_two_dimensional);

        // ====================================================================
        // Operation method
        // ====================================================================

        impl<S: ?Sized + $src::OperationMethod> $dst::OperationMethod for Wrapper<S> {
            fn formula(&self) -> Option<String> {
                self.backing().formula()
            }

            fn source_dimensions(&self) -> Option<usize> {
                self.backing().source_dimensions()
            }

            fn target_dimensions(&self) -> Option<usize> {
                self.backing().target_dimensions()
            }

            fn parameters(&self) -> Arc<dyn $dst::ParameterDescriptorGroup> {
                $dst(&self.backing().parameters())
            }
        }

        pub static OPERATION_METHOD: Dispatch<dyn $src::OperationMethod, dyn $dst::OperationMethod> =
            Dispatch {
                family: "operation method",
                unwrap: unwrap_wrappers!(
                    dyn $dst::OperationMethod: Wrapper<dyn $dst::OperationMethod>
                ),
                table: SubtypeTable {
                    subtypes: &[],
                    generic: plain_wrapper!(dyn $src::OperationMethod => dyn $dst::OperationMethod),
                },
            };

        facade!($facade: dyn $src::OperationMethod => dyn $dst::OperationMethod, OPERATION_METHOD);

        // ====================================================================
        // Coordinate operation
        // ====================================================================

        impl<S: ?Sized + $src::CoordinateOperation> $dst::CoordinateOperation for Wrapper<S> {
            fn source_crs(&self) -> Option<Arc<dyn $dst::CoordinateReferenceSystem>> {
                self.backing().source_crs().map(|crs| $dst(&crs))
            }

            fn target_crs(&self) -> Option<Arc<dyn $dst::CoordinateReferenceSystem>> {
                self.backing().target_crs().map(|crs| $dst(&crs))
            }

            fn operation_version(&self) -> Option<String> {
                self.backing().operation_version()
            }

            fn scope(&self) -> Option<String> {
                self.backing().scope()
            }

            fn math_transform(&self) -> Arc<dyn $dst::MathTransform> {
                $dst(&self.backing().math_transform())
            }

            fn as_single_operation(self: Arc<Self>) -> Option<Arc<dyn $dst::SingleOperation>> {
                forward_facet!(self.as_single_operation)
            }

            fn as_conversion(self: Arc<Self>) -> Option<Arc<dyn $dst::Conversion>> {
                forward_facet!(self.as_conversion)
            }

            fn as_transformation(self: Arc<Self>) -> Option<Arc<dyn $dst::Transformation>> {
                forward_facet!(self.as_transformation)
            }

            fn as_pass_through(self: Arc<Self>) -> Option<Arc<dyn $dst::PassThroughOperation>> {
                forward_facet!(self.as_pass_through)
            }

            fn as_concatenated(self: Arc<Self>) -> Option<Arc<dyn $dst::ConcatenatedOperation>> {
                forward_facet!(self.as_concatenated)
            }
        }

        impl<S: ?Sized + $src::SingleOperation> $dst::SingleOperation for Wrapper<S> {
            fn method(&self) -> Arc<dyn $dst::OperationMethod> {
                $dst(&self.backing().method())
            }

            fn parameter_values(&self) -> Arc<dyn $dst::ParameterValueGroup> {
                $dst(&self.backing().parameter_values())
            }
        }

        impl<S: ?Sized + $src::Conversion> $dst::Conversion for Wrapper<S> {}
        impl<S: ?Sized + $src::Transformation> $dst::Transformation for Wrapper<S> {}

        impl<S: ?Sized + $src::PassThroughOperation> $dst::PassThroughOperation for Wrapper<S> {
            fn operation(&self) -> Arc<dyn $dst::SingleOperation> {
                $dst(&self.backing().operation())
            }

            fn modified_coordinates(&self) -> Vec<usize> {
                self.backing().modified_coordinates()
            }
        }

        impl<S: ?Sized + $src::ConcatenatedOperation> $dst::ConcatenatedOperation for Wrapper<S> {
            fn operations(&self) -> Vec<Arc<dyn $dst::SingleOperation>> {
                lift_vec(&self.backing().operations(), $dst)
            }
        }

        pub static COORDINATE_OPERATION: Dispatch<
            dyn $src::CoordinateOperation,
            dyn $dst::CoordinateOperation,
        > = Dispatch {
            family: "coordinate operation",
            unwrap: unwrap_wrappers!(
                dyn $dst::CoordinateOperation:
                Wrapper<dyn $dst::CoordinateOperation>,
                Wrapper<dyn $dst::SingleOperation>,
                Wrapper<dyn $dst::Conversion>,
                Wrapper<dyn $dst::Transformation>,
                Wrapper<dyn $dst::PassThroughOperation>,
                Wrapper<dyn $dst::ConcatenatedOperation>,
            ),
            table: SubtypeTable {
                subtypes: &[
                    subtype!(dyn $src::CoordinateOperation => dyn $dst::CoordinateOperation, "single",
                        |op| Arc::clone(op).as_single_operation().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateOperation => dyn $dst::CoordinateOperation, "conversion",
                        |op| Arc::clone(op).as_conversion().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateOperation => dyn $dst::CoordinateOperation, "transformation",
                        |op| Arc::clone(op).as_transformation().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateOperation => dyn $dst::CoordinateOperation, "pass-through",
                        |op| Arc::clone(op).as_pass_through().map(Wrapper::wrap)),
                    subtype!(dyn $src::CoordinateOperation => dyn $dst::CoordinateOperation, "concatenated",
                        |op| Arc::clone(op).as_concatenated().map(Wrapper::wrap)),
                ],
                generic: plain_wrapper!(dyn $src::CoordinateOperation => dyn $dst::CoordinateOperation),
            },
        };

        facade!($facade: dyn $src::CoordinateOperation => dyn $dst::CoordinateOperation, COORDINATE_OPERATION);
        facade!($facade: dyn $src::SingleOperation => dyn $dst::SingleOperation,
            via dyn $src::CoordinateOperation, COORDINATE_OPERATION, as_single_operation);
        facade!($facade: dyn $src::Conversion => dyn $dst::Conversion,
            via dyn $src::CoordinateOperation, COORDINATE_OPERATION, as_conversion);
        facade!($facade: dyn $src::Transformation => dyn $dst::Transformation,
            via dyn $src::CoordinateOperation, COORDINATE_OPERATION, as_transformation);
        facade!($facade: dyn $src::PassThroughOperation => dyn $dst::PassThroughOperation,
            via dyn $src::CoordinateOperation, COORDINATE_OPERATION, as_pass_through);
        facade!($facade: dyn $src::ConcatenatedOperation => dyn $dst::ConcatenatedOperation,
            via dyn $src::CoordinateOperation, COORDINATE_OPERATION, as_concatenated);
    };
}
