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

//! IPv4 address-block types and subnet planning.
//!
//! Everything in this crate is pure computation over immutable inputs.
//! The planner never talks to a provider: the caller is responsible for
//! reserving the returned block and for treating a provider-side CIDR
//! conflict as a retryable condition (re-run with a bumped offset).

pub mod allocator;
pub mod block;

pub use allocator::{AllocationError, SubnetRequest};
pub use block::{BlockError, Ipv4Block, addresses_per_block};
