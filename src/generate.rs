use rand::Rng;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::builder::{Pack, build_box_pack, build_pack};
use crate::pool::{Pool, PoolPartition};

/// Label carried by packs drawn from the merged global pool.
pub const MIXED_LABEL: &str = "Mixed";

/// How the card pool is partitioned during exhaustive generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum PartitionMode {
    /// Draw every pack from the single merged pool.
    Mixed,
    /// Draw each source set's packs independently, set by set.
    BySet,
}

impl PartitionMode {
    pub fn parse(mode: &str) -> Option<PartitionMode> {
        match mode {
            "mixed" => Some(PartitionMode::Mixed),
            "by_set" => Some(PartitionMode::BySet),
            _ => None,
        }
    }
}

/// The pack composition to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum RarityMode {
    /// 10 commons + 3 uncommons, 13 cards.
    Peasant,
    /// 10 commons + 3 uncommons + 1 rare-or-mythic, 14 cards.
    Standard,
}

impl RarityMode {
    pub const COMMONS_PER_PACK: usize = 10;
    pub const UNCOMMONS_PER_PACK: usize = 3;

    pub fn parse(mode: &str) -> Option<RarityMode> {
        match mode {
            "peasant" => Some(RarityMode::Peasant),
            "standard" => Some(RarityMode::Standard),
            _ => None,
        }
    }

    pub fn has_rare_slot(self) -> bool {
        matches!(self, RarityMode::Standard)
    }

    /// Exact card count of every emitted pack in this mode.
    pub fn pack_size(self) -> usize {
        let base = Self::COMMONS_PER_PACK + Self::UNCOMMONS_PER_PACK;
        if self.has_rare_slot() { base + 1 } else { base }
    }
}

/// Settings for one exhaustive generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct GenerateSettings {
    pub partition: PartitionMode,
    pub rarity: RarityMode,
}

/// Repeatedly builds packs from `pool` until an attempt fails, threading the
/// residual pool and the global id counter.
fn exhaust_pool<R: Rng>(
    mut pool: Pool,
    label: &str,
    rarity: RarityMode,
    next_id: &mut u32,
    packs: &mut Vec<Pack>,
    rng: &mut R,
) {
    loop {
        match build_pack(pool, *next_id, label, rarity, rng) {
            Some((pack, residual)) => {
                packs.push(pack);
                pool = residual;
                *next_id += 1;
            }
            None => break,
        }
    }
}

/// Exhaustive generation: deals packs until the pool can no longer fill one.
///
/// `Mixed` shuffles the four global buckets once and exhausts them. `BySet`
/// walks the source sets in lexicographic code order and exhausts each set's
/// own buckets, with pack ids continuing across sets. An empty result means
/// the pool could not satisfy even one pack; the caller decides how to
/// present that.
pub fn generate<R: Rng>(
    partition: &PoolPartition,
    settings: &GenerateSettings,
    rng: &mut R,
) -> Vec<Pack> {
    let mut packs = Vec::new();
    let mut next_id: u32 = 1;

    match settings.partition {
        PartitionMode::Mixed => {
            let pool = partition.global.shuffled(rng);
            exhaust_pool(pool, MIXED_LABEL, settings.rarity, &mut next_id, &mut packs, rng);
        }
        PartitionMode::BySet => {
            for set in partition.sets.values() {
                let pool = set.pool.shuffled(rng);
                exhaust_pool(pool, &set.name, settings.rarity, &mut next_id, &mut packs, rng);
            }
        }
    }

    packs
}

/// Fixed-quantity generation: attempts exactly `total_packs` packs against
/// the same unconsumed pool and keeps the ones that completed.
///
/// Ids are assigned per attempt, so a dropped attempt leaves a gap but the
/// emitted ids stay strictly increasing. The result may be shorter than
/// requested; `packs.len() < total_packs` is the caller's shortfall signal.
pub fn generate_booster_box<R: Rng>(
    pool: &Pool,
    label: &str,
    total_packs: u32,
    rarity: RarityMode,
    rng: &mut R,
) -> Vec<Pack> {
    let mut packs = Vec::new();
    for id in 1..=total_packs {
        if let Some(pack) = build_box_pack(pool, id, label, rarity, rng) {
            packs.push(pack);
        }
    }
    packs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_mode_pack_sizes() {
        assert_eq!(RarityMode::Peasant.pack_size(), 13);
        assert_eq!(RarityMode::Standard.pack_size(), 14);
        assert!(!RarityMode::Peasant.has_rare_slot());
        assert!(RarityMode::Standard.has_rare_slot());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(PartitionMode::parse("mixed"), Some(PartitionMode::Mixed));
        assert_eq!(PartitionMode::parse("by_set"), Some(PartitionMode::BySet));
        assert_eq!(PartitionMode::parse("bySet"), None);
        assert_eq!(RarityMode::parse("peasant"), Some(RarityMode::Peasant));
        assert_eq!(RarityMode::parse("standard"), Some(RarityMode::Standard));
        assert_eq!(RarityMode::parse(""), None);
    }
}
