// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lighthouse CI run configuration library.
//!
//! Loads `lighthouserc` files (JSON, YAML or TOML), checks them against the
//! run configuration contract, and renders the findings.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod report;
pub mod validate;

#[cfg(test)]
pub mod test_utils;
