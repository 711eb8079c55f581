/*
 * SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// One virtual machine from a fleet snapshot. Instances are read-only
/// input: planning never mutates or persists them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub instance_id: String,
    pub private_ip: Ipv4Addr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<Ipv4Addr>,
    /// Availability-zone label, e.g. "us-west-2a". Must be non-empty.
    pub zone: String,
}

impl Instance {
    /// The address an operator should connect to: the public address
    /// when the instance has one, otherwise the private address.
    pub fn connect_address(&self) -> Ipv4Addr {
        self.public_ip.unwrap_or(self.private_ip)
    }
}

/// A point-in-time listing of the instances under consideration,
/// captured from the provider's describe output and reduced to the
/// fields planning needs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub instances: Vec<Instance>,
}
