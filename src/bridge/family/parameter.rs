//! Parameter descriptor and parameter value families.
//!
//! Parameter values are the one mutable part of either hierarchy. A wrapper
//! never caches: `set_value` translates the new value and writes it through
//! to the backing object, and every getter reads the backing object again.

macro_rules! parameter_family {
    ($src:ident => $dst:ident, $facade:ident) => {
        use std::sync::Arc;

        use $crate::bridge::convert;
        use $crate::bridge::errors::$dst as errors;
        use $crate::bridge::{$facade, Dispatch, SubtypeTable, Wrapper, lift_vec};
        use $crate::{$dst, $src};

        // ====================================================================
        // Descriptors
        // ====================================================================

        impl<S: ?Sized + $src::GeneralParameterDescriptor> $dst::GeneralParameterDescriptor
            for Wrapper<S>
        {
            fn minimum_occurs(&self) -> usize {
                self.backing().minimum_occurs()
            }

            fn maximum_occurs(&self) -> usize {
                self.backing().maximum_occurs()
            }

            fn as_descriptor(self: Arc<Self>) -> Option<Arc<dyn $dst::ParameterDescriptor>> {
                forward_facet!(self.as_descriptor)
            }

            fn as_descriptor_group(
                self: Arc<Self>,
            ) -> Option<Arc<dyn $dst::ParameterDescriptorGroup>> {
                forward_facet!(self.as_descriptor_group)
            }
        }

        impl<S: ?Sized + $src::ParameterDescriptor> $dst::ParameterDescriptor for Wrapper<S> {
            fn default_value(&self) -> Option<$dst::Value> {
                self.backing().default_value().map(convert::$dst::value)
            }

            fn minimum_value(&self) -> Option<f64> {
                self.backing().minimum_value()
            }

            fn maximum_value(&self) -> Option<f64> {
                self.backing().maximum_value()
            }

            fn unit(&self) -> Option<String> {
                self.backing().unit()
            }
        }

        impl<S: ?Sized + $src::ParameterDescriptorGroup> $dst::ParameterDescriptorGroup
            for Wrapper<S>
        {
            fn descriptors(&self) -> Vec<Arc<dyn $dst::GeneralParameterDescriptor>> {
                lift_vec(&self.backing().descriptors(), $dst)
            }

            fn descriptor(
                &self,
                name: &str,
            ) -> Result<Arc<dyn $dst::GeneralParameterDescriptor>, $dst::ParameterError> {
                let descriptor = self.backing().descriptor(name).map_err(errors::parameter)?;
                Ok($dst(&descriptor))
            }
        }

        pub static PARAMETER_DESCRIPTOR: Dispatch<
            dyn $src::GeneralParameterDescriptor,
            dyn $dst::GeneralParameterDescriptor,
        > = Dispatch {
            family: "parameter descriptor",
            unwrap: unwrap_wrappers!(
                dyn $dst::GeneralParameterDescriptor:
                Wrapper<dyn $dst::GeneralParameterDescriptor>,
                Wrapper<dyn $dst::ParameterDescriptor>,
                Wrapper<dyn $dst::ParameterDescriptorGroup>,
            ),
            table: SubtypeTable {
                subtypes: &[
                    subtype!(
                        dyn $src::GeneralParameterDescriptor => dyn $dst::GeneralParameterDescriptor,
                        "descriptor",
                        |descriptor| Arc::clone(descriptor).as_descriptor().map(Wrapper::wrap)
                    ),
                    subtype!(
                        dyn $src::GeneralParameterDescriptor => dyn $dst::GeneralParameterDescriptor,
                        "descriptor group",
                        |descriptor| Arc::clone(descriptor).as_descriptor_group().map(Wrapper::wrap)
                    ),
                ],
                generic: plain_wrapper!(
                    dyn $src::GeneralParameterDescriptor => dyn $dst::GeneralParameterDescriptor
                ),
            },
        };

        facade!($facade: dyn $src::GeneralParameterDescriptor => dyn $dst::GeneralParameterDescriptor,
            PARAMETER_DESCRIPTOR);
        facade!($facade: dyn $src::ParameterDescriptor => dyn $dst::ParameterDescriptor,
            via dyn $src::GeneralParameterDescriptor, PARAMETER_DESCRIPTOR, as_descriptor);
        facade!($facade: dyn $src::ParameterDescriptorGroup => dyn $dst::ParameterDescriptorGroup,
            via dyn $src::GeneralParameterDescriptor, PARAMETER_DESCRIPTOR, as_descriptor_group);

        // ====================================================================
        // Values
        // ====================================================================

        impl<S: ?Sized + $src::GeneralParameterValue> $dst::GeneralParameterValue for Wrapper<S> {
            fn descriptor(&self) -> Arc<dyn $dst::GeneralParameterDescriptor> {
                $dst(&self.backing().descriptor())
            }

            fn as_value(self: Arc<Self>) -> Option<Arc<dyn $dst::ParameterValue>> {
                forward_facet!(self.as_value)
            }

            fn as_value_group(self: Arc<Self>) -> Option<Arc<dyn $dst::ParameterValueGroup>> {
                forward_facet!(self.as_value_group)
            }
        }

        impl<S: ?Sized + $src::ParameterValue> $dst::ParameterValue for Wrapper<S> {
            fn value(&self) -> Option<$dst::Value> {
                self.backing().value().map(convert::$dst::value)
            }

            fn unit(&self) -> Option<String> {
                self.backing().unit()
            }

            fn double_value(&self) -> Result<f64, $dst::ParameterError> {
                self.backing().double_value().map_err(errors::parameter)
            }

            fn int_value(&self) -> Result<i64, $dst::ParameterError> {
                self.backing().int_value().map_err(errors::parameter)
            }

            fn string_value(&self) -> Result<String, $dst::ParameterError> {
                self.backing().string_value().map_err(errors::parameter)
            }

            fn set_value(&self, value: $dst::Value) -> Result<(), $dst::ParameterError> {
                self.backing()
                    .set_value(convert::$src::value(value))
                    .map_err(errors::parameter)
            }
        }

        impl<S: ?Sized + $src::ParameterValueGroup> $dst::ParameterValueGroup for Wrapper<S> {
            fn values(&self) -> Vec<Arc<dyn $dst::GeneralParameterValue>> {
                lift_vec(&self.backing().values(), $dst)
            }

            fn parameter(&self, name: &str) -> Result<Arc<dyn $dst::ParameterValue>, $dst::ParameterError> {
                let parameter = self.backing().parameter(name).map_err(errors::parameter)?;
                Ok($dst(&parameter))
            }

            fn groups(
                &self,
                name: &str,
            ) -> Result<Vec<Arc<dyn $dst::ParameterValueGroup>>, $dst::ParameterError> {
                let groups = self.backing().groups(name).map_err(errors::parameter)?;
                Ok(lift_vec(&groups, $dst))
            }
        }

        pub static PARAMETER_VALUE: Dispatch<
            dyn $src::GeneralParameterValue,
            dyn $dst::GeneralParameterValue,
        > = Dispatch {
            family: "parameter value",
            unwrap: unwrap_wrappers!(
                dyn $dst::GeneralParameterValue:
                Wrapper<dyn $dst::GeneralParameterValue>,
                Wrapper<dyn $dst::ParameterValue>,
                Wrapper<dyn $dst::ParameterValueGroup>,
            ),
            table: SubtypeTable {
                subtypes: &[
                    subtype!(dyn $src::GeneralParameterValue => dyn $dst::GeneralParameterValue, "value",
                        |value| Arc::clone(value).as_value().map(Wrapper::wrap)),
                    subtype!(dyn $src::GeneralParameterValue => dyn $dst::GeneralParameterValue, "value group",
                        |value| Arc::clone(value).as_value_group().map(Wrapper::wrap)),
                ],
                generic: plain_wrapper!(
                    dyn $src::GeneralParameterValue => dyn $dst::GeneralParameterValue
                ),
            },
        };

        facade!($facade: dyn $src::GeneralParameterValue => dyn $dst::GeneralParameterValue,
            PARAMETER_VALUE);
        facade!($facade: dyn $src::ParameterValue => dyn $dst::ParameterValue,
            via dyn $src::GeneralParameterValue, PARAMETER_VALUE, as_value);
        facade!($facade: dyn $src::ParameterValueGroup => dyn $dst::ParameterValueGroup,
            via dyn $src::GeneralParameterValue, PARAMETER_VALUE, as_value_group);
    };
}
