// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collection settings: which pages to audit and how many times.

use serde::{Deserialize, Deserializer, Serialize};

use super::defaults;

/// Collection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct CollectConfig {
    /// URLs to audit. Accepts a single string or an array.
    /// Empty means the tool picks its default page.
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub url: Vec<String>,

    /// Runs per URL, averaged to smooth out measurement noise (default: 3).
    pub number_of_runs: u32,

    /// Shell command that boots the server under test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_server_command: Option<String>,

    /// Output line that signals the server is ready.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_server_ready_pattern: Option<String>,

    /// Directory of prebuilt static files to serve instead of a server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_dist_dir: Option<String>,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            url: Vec::new(),
            number_of_runs: defaults::collect::NUMBER_OF_RUNS,
            start_server_command: None,
            start_server_ready_pattern: None,
            static_dist_dir: None,
        }
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(url) => vec![url],
        OneOrMany::Many(urls) => urls,
    })
}
