use std::fmt::Display;

use super::Aggregate;
use crate::AggregateError;

/// XOR accumulator over identifiers of a width chosen at runtime.
///
/// The width is fixed when the identity value is created, so a tree built with
/// `|| XorDigest::zero(20)` only accepts 20-byte references. Operands of another width
/// are rejected with [`AggregateError::TypeMismatch`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XorDigest {
    bytes: Vec<u8>,
}

impl XorDigest {
    /// Creates the identity value for identifiers of `width` bytes.
    pub fn zero(width: usize) -> Self {
        Self {
            bytes: vec![0; width],
        }
    }

    pub fn width(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn xor(&mut self, other: &[u8]) -> Result<(), AggregateError> {
        if other.len() != self.bytes.len() {
            return Err(AggregateError::TypeMismatch {
                expected: self.bytes.len(),
                found: other.len(),
            });
        }
        self.bytes
            .iter_mut()
            .zip(other.iter())
            .for_each(|(a, b)| *a ^= b);
        Ok(())
    }
}

impl Aggregate for XorDigest {
    type Ref = [u8];

    fn combine(&mut self, reference: &[u8]) -> Result<(), AggregateError> {
        self.xor(reference)
    }

    fn remove(&mut self, other: &XorDigest) -> Result<(), AggregateError> {
        self.xor(&other.bytes)
    }
}

impl From<Vec<u8>> for XorDigest {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl Display for XorDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(&self.bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for XorDigest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for XorDigest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        hex::decode(s)
            .map(Self::from)
            .map_err(serde::de::Error::custom)
    }
}
