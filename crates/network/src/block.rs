/*
 * SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use std::fmt::Display;
use std::net::Ipv4Addr;
use std::str::FromStr;

use ipnet::{AddrParseError, Ipv4Net, PrefixLenError};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

//
// Type definitions
//

/// An IPv4 CIDR block in canonical form. This type uses the ipnet network
/// type internally, but is stricter on what can be parsed and stored: all
/// bits after the prefix length must be zero, so the base is always a
/// network address and can never be confused with an interface address
/// (which has the same general representation but a different usage).
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Ipv4Block {
    net: Ipv4Net,
}

#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    #[error("block base has bits set after the prefix length (host address, not a network address)")]
    NonCanonicalRepresentation,
    #[error("invalid prefix length: {0}")]
    InvalidLength(#[from] PrefixLenError),
    #[error("could not parse CIDR block: {0}")]
    Parse(#[from] AddrParseError),
}

/// The number of addresses covered by one block of the given prefix
/// length. Callers must pass a length in 0..=32.
pub fn addresses_per_block(prefix_len: u8) -> u64 {
    debug_assert!(prefix_len <= 32);
    1u64 << (32 - u32::from(prefix_len))
}

impl Ipv4Block {
    pub fn new(base: Ipv4Addr, prefix_len: u8) -> Result<Self, BlockError> {
        Ipv4Net::new(base, prefix_len)
            .map_err(BlockError::from)
            .and_then(Self::try_from)
    }

    pub fn base(&self) -> Ipv4Addr {
        self.net.addr()
    }

    pub fn prefix_len(&self) -> u8 {
        self.net.prefix_len()
    }

    pub fn contains(&self, other: &Self) -> bool {
        self.net.contains(&other.net)
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.contains(other) || other.contains(self)
    }

    /// How many child blocks of `new_prefix_len` fit inside this block.
    /// Returns None when the requested length is shorter than our own
    /// prefix or longer than 32 bits.
    pub fn capacity_at(&self, new_prefix_len: u8) -> Option<u64> {
        if new_prefix_len < self.prefix_len() || new_prefix_len > 32 {
            return None;
        }
        Some(1u64 << u32::from(new_prefix_len - self.prefix_len()))
    }

    /// The `index`-th child block of `new_prefix_len`, counting from the
    /// start of this block in ascending address order. This is the index
    /// space the subnet planner allocates out of.
    pub fn child_at(&self, new_prefix_len: u8, index: u64) -> Option<Self> {
        let capacity = self.capacity_at(new_prefix_len)?;
        if index >= capacity {
            return None;
        }
        let base_bits = u64::from(self.net.network().to_bits());
        let child_bits = base_bits + index * addresses_per_block(new_prefix_len);
        let child_base = Ipv4Addr::from_bits(child_bits as u32);
        // Alignment holds: the base is aligned to our own (shorter) prefix
        // and we advanced by a whole number of child-sized blocks.
        Some(Self {
            net: Ipv4Net::new_assert(child_base, new_prefix_len),
        })
    }

    /// All child blocks of `new_prefix_len`, ascending.
    pub fn subnets(
        &self,
        new_prefix_len: u8,
    ) -> Result<impl Iterator<Item = Self>, BlockError> {
        let subnets = self.net.subnets(new_prefix_len)?;
        Ok(subnets.map(|net| Self { net }))
    }

    pub fn into_inner(self) -> Ipv4Net {
        let Self { net } = self;
        net
    }
}

//
// Other stdlib trait implementations
//

impl Display for Ipv4Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.net.fmt(f)
    }
}

impl FromStr for Ipv4Block {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Net::from_str(s)
            .map_err(BlockError::from)
            .and_then(Ipv4Block::try_from)
    }
}

impl TryFrom<Ipv4Net> for Ipv4Block {
    type Error = BlockError;

    fn try_from(value: Ipv4Net) -> Result<Self, Self::Error> {
        let is_canonical_representation = value.addr() == value.network();
        is_canonical_representation
            .then_some(Self { net: value })
            .ok_or(BlockError::NonCanonicalRepresentation)
    }
}

impl From<Ipv4Block> for Ipv4Net {
    fn from(value: Ipv4Block) -> Self {
        value.net
    }
}

// Blocks travel inside generated documents in their string form
// ("10.0.5.0/24"), and deserializing re-applies the canonical check.

impl Serialize for Ipv4Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block() {
        let good = "192.168.0.0/16";
        Ipv4Block::from_str(good).expect("Couldn't parse good block");

        let bad = "192.168.1.2/16"; // should be 192.168.0.0/16 as in `good` above.
        Ipv4Block::from_str(bad)
            .expect_err("Unexpectedly parsed block with non-canonical representation");

        let bad = "192.168.0.0/33";
        Ipv4Block::from_str(bad).expect_err("Unexpectedly parsed block with an invalid length");
    }

    #[test]
    fn test_contains_and_overlaps() {
        let parent = Ipv4Block::from_str("10.0.0.0/16").unwrap();
        let child = Ipv4Block::from_str("10.0.5.0/24").unwrap();
        let outside = Ipv4Block::from_str("10.1.0.0/24").unwrap();

        assert!(parent.contains(&child));
        assert!(!parent.contains(&outside));
        assert!(parent.overlaps(&child));
        assert!(child.overlaps(&parent));
        assert!(!child.overlaps(&outside));
    }

    #[test]
    fn test_capacity() {
        let parent = Ipv4Block::from_str("10.0.0.0/16").unwrap();
        assert_eq!(parent.capacity_at(24), Some(256));
        assert_eq!(parent.capacity_at(16), Some(1));
        assert_eq!(parent.capacity_at(32), Some(65536));
        // Can't carve a bigger block out of a smaller one.
        assert_eq!(parent.capacity_at(8), None);
        assert_eq!(parent.capacity_at(33), None);
    }

    #[test]
    fn test_child_at() {
        let parent = Ipv4Block::from_str("10.0.0.0/16").unwrap();
        let expected = Ipv4Block::from_str("10.0.5.0/24").unwrap();
        assert_eq!(parent.child_at(24, 5), Some(expected));

        let last = Ipv4Block::from_str("10.0.255.0/24").unwrap();
        assert_eq!(parent.child_at(24, 255), Some(last));
        assert_eq!(parent.child_at(24, 256), None);
    }

    #[test]
    fn test_subnets_ascending() {
        let parent = Ipv4Block::from_str("10.0.0.0/22").unwrap();
        let children: Vec<Ipv4Block> = parent.subnets(24).unwrap().collect();
        let expected: Vec<Ipv4Block> = ["10.0.0.0/24", "10.0.1.0/24", "10.0.2.0/24", "10.0.3.0/24"]
            .into_iter()
            .map(|b| Ipv4Block::from_str(b).unwrap())
            .collect();
        assert_eq!(children, expected);
    }

    #[test]
    fn test_string_round_trip_through_serde() {
        let block = Ipv4Block::from_str("172.16.8.0/21").unwrap();
        let encoded = serde_json::to_string(&block).unwrap();
        assert_eq!(encoded, "\"172.16.8.0/21\"");
        let decoded: Ipv4Block = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, block);

        serde_json::from_str::<Ipv4Block>("\"172.16.8.1/21\"")
            .expect_err("Unexpectedly deserialized a non-canonical block");
    }
}
