use crate::color::ColorSet;
use crate::ids::CopyId;
use crate::record::CardRecord;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// The four rarity tiers a pack slot can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Mythic];

    /// Parses a collector rarity string. Unknown strings (e.g. "special",
    /// "bonus") yield `None`; the pool processor drops such records from
    /// every bucket without a diagnostic.
    pub fn parse(rarity: &str) -> Option<Rarity> {
        match rarity {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "mythic" => Some(Rarity::Mythic),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Mythic => "mythic",
        }
    }

    /// Presentation weight used to order cards inside a finished pack.
    pub fn weight(self) -> u8 {
        match self {
            Rarity::Mythic => 4,
            Rarity::Rare => 3,
            Rarity::Uncommon => 2,
            Rarity::Common => 1,
        }
    }
}

/// One physical card copy as it sits in a pool or a finished pack.
///
/// `id` is minted fresh for every copy, so two copies of the same printed
/// card stay distinct through shuffling and drawing; `source_id` is the
/// stable catalog identifier of the printed card behind this copy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Card {
    pub id: CopyId,
    pub source_id: String,
    pub name: String,
    pub rarity: Rarity,
    pub colors: ColorSet,
    pub image: Option<String>,
    pub set_code: String,
    pub set_name: String,
    pub set_type: String,
}

impl Card {
    /// Mints a new copy of the printed card described by `record`.
    pub fn from_record(record: &CardRecord, rarity: Rarity) -> Self {
        Self {
            id: CopyId::new(),
            source_id: record.id.clone(),
            name: record.name.clone(),
            rarity,
            colors: ColorSet::from_symbols(&record.color_identity),
            image: record.image.clone(),
            set_code: record.set.clone(),
            set_name: record.set_name.clone(),
            set_type: record.set_type.clone(),
        }
    }
}
