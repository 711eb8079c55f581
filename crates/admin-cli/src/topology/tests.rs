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

// parse_build_requires_snapshot ensures build fails without --snapshot.
#[test]
fn parse_build_requires_snapshot() {
    Cmd::try_parse_from(["topology", "build"]).expect_err("snapshot should be required");
}

// parse_build_defaults ensures build parses with only a snapshot and
// keeps the documented SSH defaults.
#[test]
fn parse_build_defaults() {
    let cmd = Cmd::try_parse_from(["topology", "build", "--snapshot", "fleet.json"])
        .expect("should parse build");
    let Cmd::Build(args) = cmd else {
        panic!("expected build");
    };
    assert_eq!(args.snapshot.to_str(), Some("fleet.json"));
    assert_eq!(args.ssh_user, "ubuntu");
    assert_eq!(args.ssh_port, 22);
    assert_eq!(args.deploy_dir, "/home/ubuntu/deploy");
}

// parse_build_overrides ensures ssh options can be overridden.
#[test]
fn parse_build_overrides() {
    let cmd = Cmd::try_parse_from([
        "topology", "build", "-s", "-", "--ssh-user", "admin", "--ssh-port", "2222",
    ])
    .expect("should parse build with overrides");
    let Cmd::Build(args) = cmd else {
        panic!("expected build");
    };
    assert_eq!(args.ssh_user, "admin");
    assert_eq!(args.ssh_port, 2222);
}

// parse_hosts ensures hosts parses with the short snapshot flag.
#[test]
fn parse_hosts() {
    let cmd = Cmd::try_parse_from(["topology", "hosts", "-s", "fleet.json"])
        .expect("should parse hosts");
    assert!(matches!(cmd, Cmd::Hosts(_)));
}
