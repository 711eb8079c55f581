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
use std::io::Write;

// RuntimeContext is context passed to all subcommand dispatch handlers.
// Generated documents are written to `output` (stdout in production);
// everything else goes through tracing, which is wired to stderr.
pub struct RuntimeContext {
    pub output: Box<dyn Write>,
}

impl RuntimeContext {
    pub fn new() -> Self {
        Self {
            output: Box::new(std::io::stdout()),
        }
    }
}

impl Default for RuntimeContext {
    fn default() -> Self {
        Self::new()
    }
}
