//! Field-level serde helpers for [`SnowflakeId`].
//!
//! `SnowflakeId` itself serializes as its native integer. Use these modules
//! with `#[serde(with = "...")]` to pick a representation explicitly.
//!
//! [`SnowflakeId`]: crate::SnowflakeId

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes a [`SnowflakeId`](crate::SnowflakeId) as its native `i64`.
pub mod as_native {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::SnowflakeId;

    /// Serialize a snowflake ID as its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &SnowflakeId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize a snowflake ID from its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or the value is
    /// negative.
    pub fn deserialize<'de, D>(d: D) -> Result<SnowflakeId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(d)?;
        SnowflakeId::try_from(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg_attr(docsrs, doc(cfg(all(feature = "serde", feature = "base58"))))]
#[cfg(feature = "base58")]
/// Serializes a [`SnowflakeId`](crate::SnowflakeId) as a base-58 string.
pub mod as_base58 {
    use super::{Deserializer, Serializer};
    use crate::{Base58Ext, MAX_LEN, SnowflakeId};

    /// Serialize a snowflake ID as a base-58 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails or the ID has the
    /// reserved bit set.
    pub fn serialize<S>(id: &SnowflakeId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = [0; MAX_LEN];
        let encoded = id
            .encode_to_buf(&mut buf)
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        s.serialize_str(encoded)
    }

    /// Deserialize a snowflake ID from a base-58 string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is empty, contains a byte outside the alphabet, or
    ///   overflows `i64`
    pub fn deserialize<'de, D>(d: D) -> Result<SnowflakeId, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Base58Visitor;

        impl serde::de::Visitor<'_> for Base58Visitor {
            type Value = SnowflakeId;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a base58 encoded snowflake id")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                SnowflakeId::decode(v).map_err(E::custom)
            }
        }

        d.deserialize_str(Base58Visitor)
    }
}
