//! Coordination-free 64-bit Snowflake IDs and a companion base-58 codec.
//!
//! Every generated ID packs three fields into a non-negative `i64`:
//!
//! ```text
//!  Bit Index:  63           63 62            22 21          12 11             0
//!              +--------------+----------------+--------------+---------------+
//!  Field:      | reserved (1) | timestamp (41) | node ID (10) | sequence (12) |
//!              +--------------+----------------+--------------+---------------+
//! ```
//!
//! ```
//! # #[cfg(all(feature = "lock", feature = "base58"))] {
//! use snowflake_id::{LockSnowflakeGenerator, SnowflakeGenerator, DEFAULT_EPOCH, decode, encode};
//!
//! let generator = LockSnowflakeGenerator::with_epoch(10, DEFAULT_EPOCH).unwrap();
//! let id = generator.next_id();
//!
//! let text = encode(id).unwrap();
//! assert_eq!(decode(&text).unwrap(), id);
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "base58")]
mod base58;
mod error;
mod generator;
mod id;
#[cfg(feature = "serde")]
mod serde;
mod time;

#[cfg_attr(docsrs, doc(cfg(feature = "base58")))]
#[cfg(feature = "base58")]
pub use crate::base58::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
