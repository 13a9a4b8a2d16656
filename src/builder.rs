use std::collections::HashSet;
use std::mem;

use rand::Rng;
use rand::seq::IndexedRandom;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::draw::draw_unique;
use crate::generate::RarityMode;
use crate::pool::Pool;

/// One finished booster pack, immutable once returned.
///
/// `id` is 1-based and strictly increasing across a whole generation run;
/// `label` is the source-set name, or the synthetic mixed label. Cards are
/// ordered by non-increasing rarity weight and carry no duplicate names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Pack {
    pub id: u32,
    pub label: String,
    pub cards: Vec<Card>,
}

/// Presentation order inside a pack: mythic, rare, uncommon, common.
/// Stable, so draw order survives within each tier.
fn sort_by_rarity(cards: &mut [Card]) {
    cards.sort_by_key(|c| std::cmp::Reverse(c.rarity.weight()));
}

/// Pops the front-most card of `bucket` whose name is not yet used,
/// requeuing any skipped copies at the tail. `None` means the bucket
/// cannot currently supply a fresh name.
fn take_front_unique(bucket: &mut Vec<Card>, used_names: &HashSet<String>) -> Option<Card> {
    let mut draw = draw_unique(mem::take(bucket), 1, used_names);
    *bucket = draw.remaining;
    draw.selected.pop()
}

/// Fills the rare-or-mythic slot from consumable buckets. 1-in-8 packs try
/// the mythic bucket first; otherwise (or when mythics cannot supply) the
/// rare bucket is tried, with the mythic bucket as the final fallback.
fn take_rare_slot<R: Rng>(
    rares: &mut Vec<Card>,
    mythics: &mut Vec<Card>,
    used_names: &HashSet<String>,
    rng: &mut R,
) -> Option<Card> {
    if rng.random_ratio(1, 8)
        && let Some(card) = take_front_unique(mythics, used_names)
    {
        return Some(card);
    }
    if let Some(card) = take_front_unique(rares, used_names) {
        return Some(card);
    }
    take_front_unique(mythics, used_names)
}

/// Assembles one pack from `pool`, consuming what it draws.
///
/// Returns the finished pack together with the residual pool for the next
/// attempt, or `None` when any slot cannot reach its count — in that case
/// nothing is committed and no partial pack is surfaced. The pool's buckets
/// are expected to be shuffled once, upstream, per generation run.
pub fn build_pack<R: Rng>(
    pool: Pool,
    id: u32,
    label: &str,
    rarity_mode: RarityMode,
    rng: &mut R,
) -> Option<(Pack, Pool)> {
    let Pool {
        commons,
        uncommons,
        mut rares,
        mut mythics,
    } = pool;

    let mut used_names: HashSet<String> = HashSet::new();
    let mut cards: Vec<Card> = Vec::with_capacity(rarity_mode.pack_size());

    if rarity_mode.has_rare_slot() {
        let card = take_rare_slot(&mut rares, &mut mythics, &used_names, rng)?;
        used_names.insert(card.name.clone());
        cards.push(card);
    }

    let uncommon_draw = draw_unique(uncommons, RarityMode::UNCOMMONS_PER_PACK, &used_names);
    if !uncommon_draw.complete {
        return None;
    }
    for card in &uncommon_draw.selected {
        used_names.insert(card.name.clone());
    }

    let common_draw = draw_unique(commons, RarityMode::COMMONS_PER_PACK, &used_names);
    if !common_draw.complete {
        return None;
    }

    cards.extend(uncommon_draw.selected);
    cards.extend(common_draw.selected);
    sort_by_rarity(&mut cards);

    let residual = Pool {
        commons: common_draw.remaining,
        uncommons: uncommon_draw.remaining,
        rares,
        mythics,
    };

    Some((
        Pack {
            id,
            label: label.to_string(),
            cards,
        },
        residual,
    ))
}

/// Uniformly samples one card whose name is not yet used, without removing
/// it from the bucket.
fn sample_one<R: Rng>(
    bucket: &[Card],
    used_names: &HashSet<String>,
    rng: &mut R,
) -> Option<Card> {
    let eligible: Vec<&Card> = bucket
        .iter()
        .filter(|c| !used_names.contains(&c.name))
        .collect();
    eligible.choose(rng).map(|&c| c.clone())
}

fn sample_unique<R: Rng>(
    bucket: &[Card],
    count: usize,
    used_names: &mut HashSet<String>,
    rng: &mut R,
) -> Vec<Card> {
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(card) = sample_one(bucket, used_names, rng) else {
            break;
        };
        used_names.insert(card.name.clone());
        picked.push(card);
    }
    picked
}

/// Rare-or-mythic slot for box packs, sampled in place with the same
/// 1-in-8 upgrade and empty-bucket fallback as [`take_rare_slot`].
fn sample_rare_slot<R: Rng>(
    pool: &Pool,
    used_names: &HashSet<String>,
    rng: &mut R,
) -> Option<Card> {
    if rng.random_ratio(1, 8)
        && let Some(card) = sample_one(&pool.mythics, used_names, rng)
    {
        return Some(card);
    }
    if let Some(card) = sample_one(&pool.rares, used_names, rng) {
        return Some(card);
    }
    sample_one(&pool.mythics, used_names, rng)
}

/// Assembles one pack of a fixed-quantity booster box.
///
/// Unlike [`build_pack`], consumption does not persist across pack
/// boundaries: every attempt samples the original pool state, so the same
/// copy can appear in several packs of one box — many boosters pulled from
/// one shared printed set — but never twice inside the same pack. An
/// attempt that falls short of the full pack size yields `None` and is
/// dropped by the caller.
pub fn build_box_pack<R: Rng>(
    pool: &Pool,
    id: u32,
    label: &str,
    rarity_mode: RarityMode,
    rng: &mut R,
) -> Option<Pack> {
    let mut used_names: HashSet<String> = HashSet::new();
    let mut cards: Vec<Card> = Vec::with_capacity(rarity_mode.pack_size());

    if rarity_mode.has_rare_slot()
        && let Some(card) = sample_rare_slot(pool, &used_names, rng)
    {
        used_names.insert(card.name.clone());
        cards.push(card);
    }

    cards.extend(sample_unique(
        &pool.uncommons,
        RarityMode::UNCOMMONS_PER_PACK,
        &mut used_names,
        rng,
    ));
    cards.extend(sample_unique(
        &pool.commons,
        RarityMode::COMMONS_PER_PACK,
        &mut used_names,
        rng,
    ));

    if cards.len() < rarity_mode.pack_size() {
        return None;
    }

    sort_by_rarity(&mut cards);
    Some(Pack {
        id,
        label: label.to_string(),
        cards,
    })
}
