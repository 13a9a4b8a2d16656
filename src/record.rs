#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Set types classified as commander-oriented products. Records from these
/// sets are skipped when `PoolFilter::exclude_commander_sets` is on.
pub const COMMANDER_SET_TYPES: [&str; 4] = ["commander", "duel_deck", "planechase", "archenemy"];

/// Layouts that are tokens, art cards or emblems rather than playable cards.
pub const TOKEN_LAYOUTS: [&str; 4] = ["token", "double_faced_token", "emblem", "art_series"];

/// One raw card record as supplied by the external data-fetch collaborator.
///
/// Field names follow the collector JSON, so a fetched card list
/// deserializes directly. `rarity`, `set_type` and `layout` stay as the
/// collector's strings; classification happens in the pool processor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CardRecord {
    /// Stable catalog identifier of the printed card.
    pub id: String,
    pub name: String,
    pub rarity: String,
    #[cfg_attr(feature = "serialization", serde(default))]
    pub type_line: String,
    #[cfg_attr(feature = "serialization", serde(default))]
    pub set_type: String,
    #[cfg_attr(feature = "serialization", serde(default))]
    pub layout: String,
    #[cfg_attr(feature = "serialization", serde(default))]
    pub color_identity: Vec<String>,
    #[cfg_attr(feature = "serialization", serde(default))]
    pub image: Option<String>,
    pub set: String,
    #[cfg_attr(feature = "serialization", serde(default))]
    pub set_name: String,
}

/// Three independent switches controlling which records enter the pools.
/// All off admits everything with a recognized rarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct PoolFilter {
    pub exclude_basic_lands: bool,
    pub exclude_commander_sets: bool,
    pub exclude_tokens: bool,
}

impl PoolFilter {
    /// Admits everything; useful for user-supplied lists that are already curated.
    pub fn none() -> Self {
        Self::default()
    }

    /// The usual configuration for generating from a full printed set.
    pub fn draft_playables() -> Self {
        Self {
            exclude_basic_lands: true,
            exclude_commander_sets: true,
            exclude_tokens: true,
        }
    }

    /// Returns true if `record` passes every active switch.
    pub fn admits(&self, record: &CardRecord) -> bool {
        if self.exclude_basic_lands && record.type_line.contains("Basic") {
            return false;
        }
        if self.exclude_commander_sets
            && COMMANDER_SET_TYPES.contains(&record.set_type.as_str())
        {
            return false;
        }
        if self.exclude_tokens && TOKEN_LAYOUTS.contains(&record.layout.as_str()) {
            return false;
        }
        true
    }
}
