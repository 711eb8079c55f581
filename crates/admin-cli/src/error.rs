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

#[derive(Debug, thiserror::Error)]
pub enum MusterCliError {
    #[error("StdIo error {0}")]
    StdIo(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Block error: {0}")]
    Block(#[from] muster_network::BlockError),

    #[error("Allocation error: {0}")]
    Allocation(#[from] muster_network::AllocationError),

    #[error("Topology error: {0}")]
    Topology(#[from] muster_topology::TopologyError),

    #[error("Classroom error: {0}")]
    Classroom(#[from] muster_classroom::ClassroomError),

    #[error("Secrets error: {0}")]
    Secrets(#[from] muster_secrets::SecretsError),
}

pub type MusterCliResult<T> = Result<T, MusterCliError>;
