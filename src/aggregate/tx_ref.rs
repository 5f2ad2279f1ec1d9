use std::fmt::Display;
use std::str::FromStr;

use super::Aggregate;
use crate::AggregateError;

/// Size in bytes of a transaction reference.
pub const TX_REF_SIZE: usize = 32;

/// A 32-byte transaction reference.
///
/// It is both the value inserted in the tree and the aggregate held by its nodes:
/// references are accumulated with a byte-wise XOR, which is its own inverse.
/// The default value (all zeros) is the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TxRef([u8; TX_REF_SIZE]);

impl TxRef {
    /// Creates a reference from its raw bytes.
    pub const fn new(bytes: [u8; TX_REF_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the reference.
    pub fn as_bytes(&self) -> &[u8; TX_REF_SIZE] {
        &self.0
    }

    /// Whether this is the identity value.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    fn xor(&mut self, other: &TxRef) {
        self.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(a, b)| *a ^= b);
    }
}

impl Aggregate for TxRef {
    type Ref = TxRef;

    fn combine(&mut self, reference: &TxRef) -> Result<(), AggregateError> {
        self.xor(reference);
        Ok(())
    }

    fn remove(&mut self, other: &TxRef) -> Result<(), AggregateError> {
        self.xor(other);
        Ok(())
    }
}

impl From<[u8; TX_REF_SIZE]> for TxRef {
    fn from(bytes: [u8; TX_REF_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<TxRef> for [u8; TX_REF_SIZE] {
    fn from(tx_ref: TxRef) -> Self {
        tx_ref.0
    }
}

impl TryFrom<&[u8]> for TxRef {
    type Error = AggregateError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; TX_REF_SIZE] =
            bytes
                .try_into()
                .map_err(|_| AggregateError::TypeMismatch {
                    expected: TX_REF_SIZE,
                    found: bytes.len(),
                })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for TxRef {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for TxRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for TxRef {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; TX_REF_SIZE];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TxRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TxRef {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
