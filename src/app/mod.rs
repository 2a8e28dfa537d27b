// Copyright 2024-2025 hrzlgnm
// SPDX-License-Identifier: MIT-0

pub mod backtop;
pub mod demo;
mod macros;
pub mod options;
pub mod viewport;
