//! Serialization to and from the tagged wire form.
//!
//! The wire form is a mapping `{ "kind": "DenseMatrix", "data": <nested>,
//! "shape": [..], "datatype": <tag> }` with the data mirroring the tensor's
//! shape as nested arrays and scalars at the leaves. Deserialization checks
//! the tag and validates the data against the declared shape before any
//! tensor is built.

use crate::error::TensorError;
use crate::nested::{data_type_of, DataType, Nested};
use crate::scalar::Ring;
use crate::tensor::DenseTensor;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire tag identifying a serialized dense tensor.
pub const KIND: &str = "DenseMatrix";

#[derive(Serialize, Deserialize)]
struct Wire<T> {
    kind: String,
    data: Nested<T>,
    shape: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    datatype: Option<String>,
}

impl<T: Ring + Serialize> Serialize for DenseTensor<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Wire {
            kind: KIND.to_string(),
            data: self.to_nested(),
            shape: self.shape().to_vec(),
            datatype: Some(T::DATA_TYPE.to_string()),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Ring + Deserialize<'de>> Deserialize<'de> for DenseTensor<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Wire::<T>::deserialize(deserializer)?;
        if wire.kind != KIND {
            return Err(D::Error::custom(format!(
                "expected kind \"{KIND}\", got \"{}\"",
                wire.kind
            )));
        }
        wire.data.validate(&wire.shape).map_err(D::Error::custom)?;
        DenseTensor::from_nested(wire.data).map_err(D::Error::custom)
    }
}

impl<T: Ring + Serialize> DenseTensor<T> {
    /// Serialize to a JSON string in the tagged wire form.
    ///
    /// # Errors
    ///
    /// Returns a type error when the element type cannot be represented.
    ///
    /// # Examples
    ///
    /// ```
    /// use algtensors::DenseTensor;
    ///
    /// let t = DenseTensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
    /// let json = t.to_json().unwrap();
    /// let back: DenseTensor<f64> = DenseTensor::from_json(&json).unwrap();
    /// assert_eq!(back, t);
    /// ```
    pub fn to_json(&self) -> Result<String, TensorError> {
        serde_json::to_string(self).map_err(|err| TensorError::InvalidType {
            expected: "serializable tensor data",
            found: err.to_string(),
        })
    }
}

impl<T: Ring + DeserializeOwned> DenseTensor<T> {
    /// Deserialize from a JSON string in the tagged wire form.
    ///
    /// # Errors
    ///
    /// Returns a type error when the input is not a well-formed document
    /// with the `DenseMatrix` tag, or when the data does not match the
    /// declared shape.
    pub fn from_json(json: &str) -> Result<Self, TensorError> {
        serde_json::from_str(json).map_err(|err| TensorError::InvalidType {
            expected: "a serialized DenseMatrix document",
            found: err.to_string(),
        })
    }
}

/// Classify the leaves of an untyped JSON document by their runtime tag.
///
/// Useful for picking an element type before deserializing; `Mixed` and
/// `Undefined` (ragged) documents will not deserialize into any
/// [`DenseTensor`].
pub fn json_data_type(document: &Nested<serde_json::Value>) -> DataType {
    data_type_of(document, &|value| match value {
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Null => "null",
        _ => "object",
    })
}
