//! `/health` payload.

use super::null_as_default;
use crate::timestamp::Timestamp;
use serde::Deserialize;

/// Service health as reported by the indexer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HealthData {
    /// Contract version
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    /// Database state
    #[serde(deserialize_with = "null_as_default")]
    pub postgres: PostgresHealth,
    /// Cache state
    #[serde(deserialize_with = "null_as_default")]
    pub redis: RedisHealth,
    /// Chain reader state
    #[serde(deserialize_with = "null_as_default")]
    pub chain: ChainHealth,
}

/// Database reader status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostgresHealth {
    /// `OK` when healthy
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// One entry per chain reader; shape varies between deployments
    #[serde(deserialize_with = "null_as_default")]
    pub readers: Vec<serde_json::Value>,
}

/// Cache status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RedisHealth {
    /// `OK` when healthy
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// Chain reader status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChainHealth {
    /// `OK` when healthy
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Last block seen by the reader
    #[serde(deserialize_with = "null_as_default")]
    pub head_block: i64,
    /// Time of the head block
    pub head_time: Timestamp,
}
