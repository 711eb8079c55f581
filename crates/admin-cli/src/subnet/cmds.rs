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
use std::io::Write as _;

use muster_network::SubnetRequest;

use super::args::PlanSubnets;
use crate::cfg::runtime::RuntimeContext;
use crate::error::MusterCliResult;

pub fn plan(args: PlanSubnets, mut ctx: RuntimeContext) -> MusterCliResult<()> {
    let request = SubnetRequest {
        parent: args.vpc_cidr,
        new_prefix_len: args.subnet_prefix,
        existing: args.existing,
        offset: args.subnet_offset,
        skip: args.subnet_skip,
    };

    if args.subnet_offset.is_none() && !request.existing.is_empty() {
        // Surface the inferred index so the operator can pin it with
        // --subnet-offset on the next run.
        let offset = request.effective_offset()?;
        tracing::info!(
            existing = request.existing.len(),
            offset,
            "inferred block index from existing subnets; pass --subnet-offset={offset} to pin it"
        );
    }

    let blocks = request.allocate_many(args.count)?;
    for block in &blocks {
        writeln!(ctx.output, "{block}")?;
    }
    tracing::info!(
        "planned {} block(s); reserving them with the provider is the caller's job, and a \
         provider-side CIDR conflict means re-running with a bumped --subnet-offset",
        blocks.len()
    );
    Ok(())
}
