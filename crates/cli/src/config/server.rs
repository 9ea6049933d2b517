// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Orchestration settings: the local report server and the project wizard.
//!
//! Both sections are usually left empty.

use serde::{Deserialize, Serialize};

/// Report server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

/// Report server storage backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct StorageConfig {
    pub storage_method: StorageMethod,

    pub sql_dialect: SqlDialect,

    /// Database file (sqlite).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_database_path: Option<String>,

    /// Connection string (postgres, mysql).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_connection_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMethod {
    #[default]
    Sql,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    #[default]
    Sqlite,
    Postgres,
    Mysql,
}

/// Project wizard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct WizardConfig {
    /// Server the wizard registers new projects with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_base_url: Option<String>,
}
