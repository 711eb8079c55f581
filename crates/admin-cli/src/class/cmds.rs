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

use muster_classroom::{Roster, UserData, assign_seats, export_roster};
use muster_secrets::{KeyMaterial, crypt_password, generate_password};

use super::args::{ExportArgs, RosterArgs, UserDataArgs};
use crate::cfg::runtime::RuntimeContext;
use crate::error::MusterCliResult;
use crate::snapshot::{load_snapshot, read_input};

pub fn roster(args: RosterArgs, mut ctx: RuntimeContext) -> MusterCliResult<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let keys = args
        .key_files
        .iter()
        .map(|path| Ok(KeyMaterial::new(fs::read_to_string(path)?)))
        .collect::<MusterCliResult<Vec<_>>>()?;

    let roster = assign_seats(
        &args.course_id,
        &snapshot.instances,
        args.num_seats,
        args.instances_per_seat,
        keys,
    )?;

    // The roster is this command's only stdout output, so it can be
    // redirected straight to a file and mailed out seat by seat.
    writeln!(ctx.output, "{}", serde_json::to_string(&roster)?)?;
    Ok(())
}

pub fn user_data(args: UserDataArgs, mut ctx: RuntimeContext) -> MusterCliResult<()> {
    let key = KeyMaterial::new(fs::read_to_string(&args.key_file)?);
    let password = match args.password {
        Some(password) => password,
        None => {
            let generated = generate_password();
            tracing::info!("generated one-time password: {generated}");
            generated
        }
    };
    let hash = crypt_password(&password)?;

    let document = UserData::for_seat(&args.login_user, &key, &hash);
    write!(ctx.output, "{}", document.render()?)?;
    Ok(())
}

pub fn export(args: ExportArgs, _ctx: RuntimeContext) -> MusterCliResult<()> {
    let raw = read_input(&args.roster)?;
    let roster: Roster = serde_json::from_str(&raw)?;
    let course_dir = export_roster(&roster, &args.out_dir)?;
    tracing::info!(course_dir = %course_dir.display(), "roster exported");
    Ok(())
}
