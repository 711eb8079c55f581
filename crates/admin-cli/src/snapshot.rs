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
use std::fs;
use std::io::Read;
use std::path::Path;

use muster_topology::Snapshot;

use crate::error::MusterCliResult;

/// Read a whole input document from a file, or from stdin when the path
/// is "-".
pub fn read_input(path: &Path) -> MusterCliResult<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Load an instance snapshot document.
pub fn load_snapshot(path: &Path) -> MusterCliResult<Snapshot> {
    let raw = read_input(path)?;
    let snapshot: Snapshot = serde_json::from_str(&raw)?;
    tracing::debug!(instances = snapshot.instances.len(), "loaded snapshot");
    Ok(snapshot)
}
