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
use clap::Parser;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

mod cfg;
mod class;
mod error;
mod generate_shell_complete;
mod snapshot;
mod subnet;
mod topology;

use cfg::cli_options::CliOptions;
use cfg::dispatch::Dispatch;
use cfg::runtime::RuntimeContext;

fn main() -> Result<(), eyre::Report> {
    color_eyre::install()?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    // Diagnostics go to stderr so that generated documents on stdout can
    // be redirected cleanly to a file.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()?;

    let options = CliOptions::parse();
    options.command.dispatch(RuntimeContext::new())?;
    Ok(())
}
