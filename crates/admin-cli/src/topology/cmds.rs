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

use muster_topology::{ClusterTopology, TopologyOptions, assign_roles};
use prettytable::{Table, row};

use super::args::{BuildTopology, HostsQuery};
use crate::cfg::runtime::RuntimeContext;
use crate::error::MusterCliResult;
use crate::snapshot::load_snapshot;

pub fn build(args: BuildTopology, mut ctx: RuntimeContext) -> MusterCliResult<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    if let Some(cluster_name) = &args.cluster_name {
        tracing::info!(
            cluster_name,
            instances = snapshot.instances.len(),
            "building topology"
        );
    }

    let assignment = assign_roles(&snapshot.instances);
    let options = TopologyOptions {
        ssh_user: args.ssh_user.clone(),
        ssh_port: args.ssh_port,
        deploy_dir: args.deploy_dir,
        data_dir: args.data_dir,
    };
    let topology = ClusterTopology::from_assignment(&assignment, &options)?;
    write!(ctx.output, "{}", topology.to_yaml()?)?;

    if let Some(management) = assignment.management() {
        tracing::info!(
            "connect to the management node with: ssh -o StrictHostKeyChecking=accept-new -l {} {}",
            args.ssh_user,
            management.connect_address()
        );
    }
    Ok(())
}

pub fn hosts(args: HostsQuery, mut ctx: RuntimeContext) -> MusterCliResult<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let assignment = assign_roles(&snapshot.instances);

    let mut table = Table::new();
    table.set_titles(row!["PRIVATE", "PUBLIC", "INSTANCE", "ZONE", "ROLE"]);
    for record in assignment.records() {
        let instance = &record.instance;
        table.add_row(row![
            instance.private_ip,
            instance
                .public_ip
                .map(|ip| ip.to_string())
                .unwrap_or_default(),
            instance.instance_id,
            instance.zone,
            record.role
        ]);
    }
    table.print(&mut ctx.output)?;
    Ok(())
}
