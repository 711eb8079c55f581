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
use std::fs;
use std::io::Write as _;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use crate::ClassroomError;
use crate::seats::Roster;

/// Split a roster into per-student files under a new directory named
/// after the course id: one `student-<n>.pem` per seat (key material
/// followed by the seat's connection details) plus the full roster as
/// `instances.json`.
///
/// Seat files hold credentials, so everything is written 0600 and an
/// already-existing course directory is an error, not a merge target.
pub fn export_roster(roster: &Roster, parent_dir: &Path) -> Result<PathBuf, ClassroomError> {
    let course_dir = parent_dir.join(&roster.course_id);
    if course_dir.exists() {
        return Err(ClassroomError::ExportDirExists(course_dir));
    }
    fs::create_dir_all(&course_dir)?;

    for (index, seat) in roster.seats.iter().enumerate() {
        let path = course_dir.join(format!("student-{index}.pem"));
        let mut file = secret_file(&path)?;
        if let Some(key) = &seat.key {
            writeln!(file, "{}", key.expose())?;
        }
        writeln!(file, "{}", serde_json::to_string_pretty(seat)?)?;
        tracing::debug!(path = %path.display(), "wrote seat file");
    }

    let manifest = course_dir.join("instances.json");
    let mut file = secret_file(&manifest)?;
    serde_json::to_writer_pretty(&mut file, roster)?;
    writeln!(file)?;

    tracing::info!(
        course_dir = %course_dir.display(),
        seats = roster.seats.len(),
        "exported roster"
    );
    Ok(course_dir)
}

fn secret_file(path: &Path) -> Result<fs::File, ClassroomError> {
    Ok(fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)?)
}
