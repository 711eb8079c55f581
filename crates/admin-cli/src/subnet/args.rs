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
use clap::Parser;
use muster_network::Ipv4Block;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Compute the next free child CIDR blocks inside a parent block")]
    Plan(PlanSubnets),
}

#[derive(Parser, Debug)]
pub struct PlanSubnets {
    #[clap(long, help = "Parent CIDR block, e.g. the VPC CIDR")]
    pub vpc_cidr: Ipv4Block,
    #[clap(
        short = 'p',
        long,
        default_value_t = 24,
        help = "Prefix length of the new subnets"
    )]
    pub subnet_prefix: u8,
    #[clap(
        long = "existing",
        help = "Existing child CIDR block already carved from the parent; repeatable"
    )]
    pub existing: Vec<Ipv4Block>,
    #[clap(
        long,
        help = "Explicit block index to start at, skipping inference from existing blocks"
    )]
    pub subnet_offset: Option<u64>,
    #[clap(
        long,
        default_value_t = 0,
        help = "Extra blocks to skip if you need to avoid IP ranges already allocated to unlisted reservations"
    )]
    pub subnet_skip: u64,
    #[clap(
        short = 'c',
        long,
        default_value_t = 1,
        help = "Number of consecutive blocks to plan, one per availability zone"
    )]
    pub count: u64,
}
