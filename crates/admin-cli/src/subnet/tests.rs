/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// The intent of the tests.rs file is to test the integrity of the
// command, including things like basic structure parsing, enum
// translations, and any external input validators that are
// configured. Specific "categories" are:
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.

use clap::{CommandFactory, Parser};

use super::args::*;

// verify_cmd_structure runs the underlying clap debug_assert()
#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_plan_requires_vpc_cidr ensures plan fails without a parent block.
#[test]
fn parse_plan_requires_vpc_cidr() {
    Cmd::try_parse_from(["subnet", "plan"]).expect_err("vpc-cidr should be required");
}

// parse_plan_defaults ensures plan parses with the documented defaults.
#[test]
fn parse_plan_defaults() {
    let Cmd::Plan(args) = Cmd::try_parse_from(["subnet", "plan", "--vpc-cidr", "10.0.0.0/16"])
        .expect("should parse plan");
    assert_eq!(args.vpc_cidr.to_string(), "10.0.0.0/16");
    assert_eq!(args.subnet_prefix, 24);
    assert_eq!(args.subnet_offset, None);
    assert_eq!(args.subnet_skip, 0);
    assert_eq!(args.count, 1);
}

// parse_plan_rejects_host_address ensures a non-canonical parent block
// fails at the argument layer, before any planning runs.
#[test]
fn parse_plan_rejects_host_address() {
    Cmd::try_parse_from(["subnet", "plan", "--vpc-cidr", "10.0.0.1/16"])
        .expect_err("host address should be rejected");
}

// parse_plan_existing_is_repeatable ensures --existing accumulates.
#[test]
fn parse_plan_existing_is_repeatable() {
    let Cmd::Plan(args) = Cmd::try_parse_from([
        "subnet",
        "plan",
        "--vpc-cidr",
        "10.0.0.0/16",
        "--existing",
        "10.0.0.0/24",
        "--existing",
        "10.0.1.0/24",
        "--subnet-offset",
        "7",
        "-c",
        "3",
    ])
    .expect("should parse plan with existing blocks");
    assert_eq!(args.existing.len(), 2);
    assert_eq!(args.subnet_offset, Some(7));
    assert_eq!(args.count, 3);
}
