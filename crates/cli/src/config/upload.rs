// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Upload destination for generated reports.

use serde::{Deserialize, Serialize};

/// Upload configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct UploadConfig {
    pub target: UploadTarget,

    /// Base URL of the private server (target = "lhci").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_base_url: Option<String>,

    /// Build token issued by the private server (target = "lhci").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Report directory (target = "filesystem").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

/// Where reports are persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadTarget {
    /// Ephemeral shared storage, public links expire after a few days.
    #[default]
    TemporaryPublicStorage,
    /// A self-hosted report server.
    Lhci,
    /// Local directory.
    Filesystem,
}
