//! Installed map metadata

use serde::{Deserialize, Serialize};

/// Metadata of an installed map, as resolved by the content service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    /// Name used in start scripts and battle options
    pub script_name: String,
    pub file_name: String,
    pub friendly_name: String,
    /// Size in map units (512 elmos each)
    pub width: u32,
    pub height: u32,
    pub player_count_min: Option<u32>,
    pub player_count_max: Option<u32>,
}

impl MapData {
    pub fn new(script_name: impl Into<String>, file_name: impl Into<String>) -> Self {
        let script_name = script_name.into();
        Self {
            friendly_name: script_name.clone(),
            script_name,
            file_name: file_name.into(),
            width: 0,
            height: 0,
            player_count_min: None,
            player_count_max: None,
        }
    }
}
