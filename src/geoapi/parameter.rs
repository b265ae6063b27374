//! Parameter descriptors and parameter values.

use std::sync::Arc;

use super::{IdentifiedObject, ParameterError};
use crate::base::Object;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Doubles(Vec<f64>),
    Text(String),
}

pub trait GeneralParameterDescriptor: IdentifiedObject {
    fn minimum_occurs(&self) -> usize;
    fn maximum_occurs(&self) -> usize;

    fn as_descriptor(self: Arc<Self>) -> Option<Arc<dyn ParameterDescriptor>> {
        None
    }

    fn as_descriptor_group(self: Arc<Self>) -> Option<Arc<dyn ParameterDescriptorGroup>> {
        None
    }
}

pub trait ParameterDescriptor: GeneralParameterDescriptor {
    fn default_value(&self) -> Option<Value>;
    fn minimum_value(&self) -> Option<f64>;
    fn maximum_value(&self) -> Option<f64>;
    fn unit(&self) -> Option<String>;
}

pub trait ParameterDescriptorGroup: GeneralParameterDescriptor {
    fn descriptors(&self) -> Vec<Arc<dyn GeneralParameterDescriptor>>;
    fn descriptor(&self, name: &str) -> Result<Arc<dyn GeneralParameterDescriptor>, ParameterError>;
}

pub trait GeneralParameterValue: Object {
    fn descriptor(&self) -> Arc<dyn GeneralParameterDescriptor>;

    fn as_value(self: Arc<Self>) -> Option<Arc<dyn ParameterValue>> {
        None
    }

    fn as_value_group(self: Arc<Self>) -> Option<Arc<dyn ParameterValueGroup>> {
        None
    }
}

pub trait ParameterValue: GeneralParameterValue {
    fn value(&self) -> Option<Value>;
    fn unit(&self) -> Option<String>;
    fn double_value(&self) -> Result<f64, ParameterError>;
    fn int_value(&self) -> Result<i64, ParameterError>;
    fn string_value(&self) -> Result<String, ParameterError>;
    fn set_value(&self, value: Value) -> Result<(), ParameterError>;
}

pub trait ParameterValueGroup: GeneralParameterValue {
    fn values(&self) -> Vec<Arc<dyn GeneralParameterValue>>;
    fn parameter(&self, name: &str) -> Result<Arc<dyn ParameterValue>, ParameterError>;
    fn groups(&self, name: &str) -> Result<Vec<Arc<dyn ParameterValueGroup>>, ParameterError>;
}
