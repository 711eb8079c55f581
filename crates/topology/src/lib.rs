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

//! Cluster topology planning from instance snapshots.
//!
//! Role assignment is a pure function of the snapshot, so re-running it
//! against the same fleet state yields the same generated configuration.
//! That matters because the configuration is reviewed (and sometimes
//! edited) by a human before it is applied.

pub mod document;
pub mod instance;
pub mod roles;

pub use document::{ClusterTopology, TopologyOptions};
pub use instance::{Instance, Snapshot};
pub use roles::{Role, RoleAssignment, RoleRecord, assign_roles};

#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("no management node selected: the instance snapshot is empty")]
    NoManagementNode,
}
