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

pub mod args;
pub mod cmds;


pub use args::Cmd;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::error::MusterCliResult;

impl Dispatch for Cmd {
    fn dispatch(self, ctx: RuntimeContext) -> MusterCliResult<()> {
        match self {
            Cmd::Roster(args) => cmds::roster(args, ctx),
            Cmd::UserData(args) => cmds::user_data(args, ctx),
            Cmd::Export(args) => cmds::export(args, ctx),
        }
    }
}
