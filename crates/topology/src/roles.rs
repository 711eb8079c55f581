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
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::instance::Instance;

//
// Type definitions
//

/// The logical function an instance serves in the generated cluster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    /// The single instance that hosts deploy tooling, monitoring and
    /// alerting, and is the operator's SSH entry point.
    Management,
    /// The first instance of each zone after the management pick: runs
    /// the query and placement services.
    ZonePrimary,
    /// Everything else: storage instances, labelled with their zone so
    /// replicas spread across zones.
    Secondary { zone: String },
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Management => write!(f, "management"),
            Role::ZonePrimary => write!(f, "zone-primary"),
            Role::Secondary { .. } => write!(f, "secondary"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRecord {
    pub instance: Instance,
    pub role: Role,
}

/// Every input instance with exactly one role, in the deterministic walk
/// order (zones lexicographic, addresses ascending within a zone).
#[derive(Clone, Debug, Default)]
pub struct RoleAssignment {
    records: Vec<RoleRecord>,
    management: Option<usize>,
}

impl RoleAssignment {
    /// The management instance, if any instance existed to pick. Callers
    /// must treat `None` as "nothing to deploy".
    pub fn management(&self) -> Option<&Instance> {
        self.management.map(|index| &self.records[index].instance)
    }

    pub fn records(&self) -> &[RoleRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Assign every instance exactly one role.
///
/// Zone labels are walked in lexicographic order and instances within a
/// zone in ascending private-address order (numeric: ".9" before ".10").
/// The first instance encountered overall becomes management; the first
/// instance of every zone walked after that becomes a zone primary; the
/// rest are secondaries. A zone whose only instance became management
/// contributes no zone primary.
pub fn assign_roles(instances: &[Instance]) -> RoleAssignment {
    // BTreeMap keys give an explicit, total string ordering over zone
    // labels, independent of the order the snapshot listed instances in.
    let mut zones: BTreeMap<&str, Vec<&Instance>> = BTreeMap::new();
    for instance in instances {
        zones
            .entry(instance.zone.as_str())
            .or_default()
            .push(instance);
    }

    let mut records = Vec::with_capacity(instances.len());
    let mut management = None;
    for group in zones.values_mut() {
        // Ipv4Addr compares numerically, which is the ordering we need.
        group.sort_by_key(|instance| instance.private_ip);
        for (position, instance) in group.iter().enumerate() {
            let role = if management.is_none() {
                management = Some(records.len());
                Role::Management
            } else if position == 0 {
                Role::ZonePrimary
            } else {
                Role::Secondary {
                    zone: instance.zone.clone(),
                }
            };
            tracing::debug!(
                instance = %instance.instance_id,
                zone = %instance.zone,
                role = %role,
                "assigned role"
            );
            records.push(RoleRecord {
                instance: (*instance).clone(),
                role,
            });
        }
    }

    RoleAssignment {
        records,
        management,
    }
}
