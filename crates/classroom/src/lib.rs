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

//! Classroom provisioning documents: seats with one-time credentials,
//! the roster handed back to the instructor, and the cloud-init payload
//! each seat's instances boot with.

use std::path::PathBuf;

pub mod export;
pub mod seats;
pub mod user_data;

pub use export::export_roster;
pub use seats::{Roster, Seat, SeatInstance, assign_seats};
pub use user_data::UserData;

#[derive(Debug, thiserror::Error)]
pub enum ClassroomError {
    #[error("snapshot has {actual} instances but the requested seats need {expected}")]
    SeatCountMismatch { expected: usize, actual: usize },

    #[error("{keys} key files were provided for {seats} seats; provide one per seat or none")]
    KeyCountMismatch { seats: usize, keys: usize },

    #[error("instances-per-seat must be at least 1")]
    EmptySeat,

    #[error("export directory {0} already exists; refusing to overwrite student credentials")]
    ExportDirExists(PathBuf),

    #[error("StdIo error {0}")]
    StdIo(#[from] std::io::Error),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}
