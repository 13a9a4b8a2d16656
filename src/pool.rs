use std::collections::BTreeMap;

use rand::Rng;

use crate::card::{Card, Rarity};
use crate::draw::shuffled;
use crate::record::{CardRecord, PoolFilter};

/// Four rarity buckets for one pool scope.
///
/// Buckets own their cards outright, so `Clone` is a true per-bucket value
/// copy; two clones never alias each other's contents. Exhaustive
/// generation rewrites buckets after every successful pack, so every run
/// must consume its own copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    pub commons: Vec<Card>,
    pub uncommons: Vec<Card>,
    pub rares: Vec<Card>,
    pub mythics: Vec<Card>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(&self, rarity: Rarity) -> &[Card] {
        match rarity {
            Rarity::Common => &self.commons,
            Rarity::Uncommon => &self.uncommons,
            Rarity::Rare => &self.rares,
            Rarity::Mythic => &self.mythics,
        }
    }

    /// Inserts a card into the bucket matching its rarity.
    pub fn push(&mut self, card: Card) {
        match card.rarity {
            Rarity::Common => self.commons.push(card),
            Rarity::Uncommon => self.uncommons.push(card),
            Rarity::Rare => self.rares.push(card),
            Rarity::Mythic => self.mythics.push(card),
        }
    }

    /// Total number of cards across all four buckets.
    pub fn len(&self) -> usize {
        self.commons.len() + self.uncommons.len() + self.rares.len() + self.mythics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a new pool with each bucket independently shuffled.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Pool {
        Pool {
            commons: shuffled(&self.commons, rng),
            uncommons: shuffled(&self.uncommons, rng),
            rares: shuffled(&self.rares, rng),
            mythics: shuffled(&self.mythics, rng),
        }
    }
}

/// One source set's pool plus its display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPool {
    pub code: String,
    pub name: String,
    pub pool: Pool,
}

/// Output of the pool processor: the merged global pool and one pool per
/// source set, keyed by set code. `BTreeMap` keeps set iteration in
/// lexicographic code order so by-set generation is deterministic.
#[derive(Debug, Clone, Default)]
pub struct PoolPartition {
    pub global: Pool,
    pub sets: BTreeMap<String, SetPool>,
}

impl PoolPartition {
    /// Classifies raw records into rarity buckets, in both the global scope
    /// and each record's source-set scope.
    ///
    /// A record rejected by `filter` is skipped entirely. A record whose
    /// rarity string is not one of the four known tiers is likewise dropped
    /// from every bucket, without a diagnostic; callers wanting to count
    /// such records can pre-classify with [`Rarity::parse`].
    pub fn from_records(records: &[CardRecord], filter: &PoolFilter) -> Self {
        let mut partition = PoolPartition::default();

        for record in records {
            if !filter.admits(record) {
                continue;
            }
            let Some(rarity) = Rarity::parse(&record.rarity) else {
                continue;
            };

            let card = Card::from_record(record, rarity);
            let set_pool = partition
                .sets
                .entry(record.set.clone())
                .or_insert_with(|| SetPool {
                    code: record.set.clone(),
                    name: record.set_name.clone(),
                    pool: Pool::new(),
                });
            set_pool.pool.push(card.clone());
            partition.global.push(card);
        }

        partition
    }
}
