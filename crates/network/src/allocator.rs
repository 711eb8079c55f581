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
use crate::block::{Ipv4Block, addresses_per_block};

//
// Type definitions
//

/// One request to carve a child block out of a parent block. Constructed
/// per invocation and consumed once; repeated calls with the same fields
/// return the same block.
#[derive(Clone, Debug)]
pub struct SubnetRequest {
    /// The parent block (e.g. a VPC CIDR) the child is carved from.
    pub parent: Ipv4Block,
    /// Prefix length of the child block to produce.
    pub new_prefix_len: u8,
    /// Child blocks already carved from the parent, as reported by the
    /// provider. May be empty, and may mix prefix lengths (which makes
    /// offset inference refuse to guess).
    pub existing: Vec<Ipv4Block>,
    /// Explicit block index. When set, offset inference is skipped
    /// entirely.
    pub offset: Option<u64>,
    /// Extra blocks to skip past the effective offset, to dodge known
    /// reservations the provider listing doesn't show.
    pub skip: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    #[error(
        "existing child blocks have inconsistent prefix lengths ({}); \
         pass an explicit offset or use a fresh parent block",
        format_blocks(.observed)
    )]
    IrregularAllocation { observed: Vec<Ipv4Block> },

    #[error(
        "block index {index} is out of range: {parent} holds {capacity} blocks of length /{requested}"
    )]
    Exhausted {
        parent: Ipv4Block,
        requested: u8,
        index: u64,
        capacity: u64,
    },

    #[error("requested prefix length /{requested} does not fit inside parent {parent}")]
    InvalidPrefix { parent: Ipv4Block, requested: u8 },
}

fn format_blocks(blocks: &[Ipv4Block]) -> String {
    let rendered: Vec<String> = blocks.iter().map(ToString::to_string).collect();
    rendered.join(", ")
}

impl SubnetRequest {
    /// Compute the next free child block.
    ///
    /// The candidate children of `parent` at `new_prefix_len` form an
    /// ordered index space; this picks the candidate at the effective
    /// offset (explicit or inferred) plus `skip`. The result is not
    /// checked against the live network: reserving it with the provider,
    /// and retrying with a bumped offset on a CIDR conflict, is the
    /// caller's job.
    pub fn allocate(&self) -> Result<Ipv4Block, AllocationError> {
        self.allocate_many(1).map(|mut blocks| {
            // allocate_many(1) returns exactly one block.
            blocks.pop().unwrap()
        })
    }

    /// Compute `count` consecutive child blocks starting at the effective
    /// offset, one per availability zone being provisioned. Fails without
    /// partial output if any index falls outside the parent.
    pub fn allocate_many(&self, count: u64) -> Result<Vec<Ipv4Block>, AllocationError> {
        let capacity =
            self.parent
                .capacity_at(self.new_prefix_len)
                .ok_or(AllocationError::InvalidPrefix {
                    parent: self.parent,
                    requested: self.new_prefix_len,
                })?;

        let first = self.effective_offset()? + self.skip;
        let mut blocks = Vec::with_capacity(count as usize);
        for index in first..first.saturating_add(count) {
            let block = self.parent.child_at(self.new_prefix_len, index).ok_or(
                AllocationError::Exhausted {
                    parent: self.parent,
                    requested: self.new_prefix_len,
                    index,
                    capacity,
                },
            )?;
            blocks.push(block);
        }
        Ok(blocks)
    }

    /// The block index allocation starts from, before `skip` is applied:
    /// the explicit offset when one was given, otherwise inferred from
    /// the existing children.
    ///
    /// Inference converts "how many blocks are already used at their own
    /// prefix granularity" into an equivalent count at the requested
    /// granularity, which assumes the existing allocations fill the index
    /// space contiguously from zero. That holds for parents that have only
    /// ever been carved by this planner; for anything else it is
    /// best-effort, and the provider's conflict response is authoritative.
    pub fn effective_offset(&self) -> Result<u64, AllocationError> {
        if let Some(offset) = self.offset {
            return Ok(offset);
        }
        if self.parent.capacity_at(self.new_prefix_len).is_none() {
            return Err(AllocationError::InvalidPrefix {
                parent: self.parent,
                requested: self.new_prefix_len,
            });
        }
        let Some(first) = self.existing.first() else {
            return Ok(0);
        };

        let shared_prefix_len = first.prefix_len();
        if self
            .existing
            .iter()
            .any(|block| block.prefix_len() != shared_prefix_len)
        {
            let mut observed = self.existing.clone();
            observed.sort();
            return Err(AllocationError::IrregularAllocation { observed });
        }

        let used_addresses =
            self.existing.len() as u64 * addresses_per_block(shared_prefix_len);
        Ok(used_addresses / addresses_per_block(self.new_prefix_len))
    }
}
