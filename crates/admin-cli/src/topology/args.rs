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
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Generate the cluster topology document from an instance snapshot")]
    Build(BuildTopology),
    #[clap(about = "List snapshot instances with their assigned roles")]
    Hosts(HostsQuery),
}

#[derive(Parser, Debug)]
pub struct BuildTopology {
    #[clap(
        short = 's',
        long,
        help = "Instance snapshot JSON file, or '-' for stdin"
    )]
    pub snapshot: PathBuf,
    #[clap(
        short = 'n',
        long,
        env = "CLUSTER_NAME",
        help = "Name of the cluster the snapshot was taken from, for log context"
    )]
    pub cluster_name: Option<String>,
    #[clap(
        long,
        default_value = "ubuntu",
        help = "SSH login user written to the document"
    )]
    pub ssh_user: String,
    #[clap(long, default_value_t = 22, help = "SSH port written to the document")]
    pub ssh_port: u16,
    #[clap(
        long,
        default_value = "/home/ubuntu/deploy",
        help = "Deployment directory on cluster hosts"
    )]
    pub deploy_dir: String,
    #[clap(
        long,
        default_value = "/home/ubuntu/data",
        help = "Data directory on cluster hosts"
    )]
    pub data_dir: String,
}

#[derive(Parser, Debug)]
pub struct HostsQuery {
    #[clap(
        short = 's',
        long,
        help = "Instance snapshot JSON file, or '-' for stdin"
    )]
    pub snapshot: PathBuf,
}
