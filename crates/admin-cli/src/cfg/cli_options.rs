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

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::error::MusterCliResult;
use crate::{class, generate_shell_complete, subnet, topology};

#[derive(Parser, Debug)]
#[clap(
    name = "muster-admin-cli",
    version,
    about = "Plan fleet topologies, subnet CIDRs and classroom seats from instance snapshots"
)]
pub struct CliOptions {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub enum Command {
    #[clap(subcommand, about = "Cluster topology planning")]
    Topology(topology::Cmd),
    #[clap(subcommand, about = "Subnet CIDR planning")]
    Subnet(subnet::Cmd),
    #[clap(subcommand, about = "Classroom seat provisioning")]
    Class(class::Cmd),
    #[clap(about = "Generate shell completion scripts")]
    GenerateShellComplete(generate_shell_complete::Cmd),
}

impl Dispatch for Command {
    fn dispatch(self, ctx: RuntimeContext) -> MusterCliResult<()> {
        match self {
            Command::Topology(cmd) => cmd.dispatch(ctx),
            Command::Subnet(cmd) => cmd.dispatch(ctx),
            Command::Class(cmd) => cmd.dispatch(ctx),
            Command::GenerateShellComplete(cmd) => cmd.dispatch(ctx),
        }
    }
}
