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
    #[clap(about = "Assign snapshot instances to student seats and emit the roster JSON")]
    Roster(RosterArgs),
    #[clap(about = "Emit the cloud-init user-data document for one seat")]
    UserData(UserDataArgs),
    #[clap(about = "Split a roster into per-student credential files")]
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
pub struct RosterArgs {
    #[clap(
        short = 's',
        long,
        help = "Instance snapshot JSON file, or '-' for stdin"
    )]
    pub snapshot: PathBuf,
    #[clap(short = 'n', long, help = "The number of students to build seats for")]
    pub num_seats: usize,
    #[clap(
        short = 'i',
        long,
        default_value_t = 1,
        help = "The number of instances per student"
    )]
    pub instances_per_seat: usize,
    #[clap(
        long,
        default_value = "my-class",
        help = "The ID to identify this specific deployment of resources"
    )]
    pub course_id: String,
    #[clap(
        long = "key-file",
        help = "Private key file for each seat, in seat order; repeatable"
    )]
    pub key_files: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct UserDataArgs {
    #[clap(short = 'k', long, help = "The seat's private key file")]
    pub key_file: PathBuf,
    #[clap(
        long,
        default_value = "ubuntu",
        help = "The OS username of the default login user"
    )]
    pub login_user: String,
    #[clap(long, help = "Plaintext password to hash; generated when omitted")]
    pub password: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    #[clap(short = 'r', long, help = "Roster JSON file, or '-' for stdin")]
    pub roster: PathBuf,
    #[clap(
        short = 'o',
        long,
        default_value = ".",
        help = "Directory to create the course directory under"
    )]
    pub out_dir: PathBuf,
}
