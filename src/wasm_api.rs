//! WASM-facing API for browser integration.
//!
//! This module provides a small wrapper around the generation engine so
//! JavaScript can:
//! - load a fetched card list once and build the pools
//! - run exhaustive generation with the chosen modes
//! - deal a fixed-quantity booster box from one set

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::generate::{GenerateSettings, MIXED_LABEL, PartitionMode, RarityMode};
use crate::pool::PoolPartition;
use crate::record::{CardRecord, PoolFilter};

fn entropy_seed() -> u64 {
    (js_sys::Math::random() * (u64::MAX as f64)) as u64
}

fn parse_rarity_mode(rarity_mode: &str) -> Result<RarityMode, JsValue> {
    RarityMode::parse(rarity_mode)
        .ok_or_else(|| JsValue::from_str(&format!("unknown rarity mode: {rarity_mode}")))
}

/// Holds the processed pools for one card list, plus the RNG driving all
/// generation runs against it.
#[wasm_bindgen]
pub struct PackGenerator {
    partition: PoolPartition,
    rng: StdRng,
}

#[wasm_bindgen]
impl PackGenerator {
    /// Builds the pools from the card records the client fetched.
    ///
    /// `records` is an array of collector card objects; `filter` is an
    /// optional object with the three exclusion switches.
    #[wasm_bindgen(constructor)]
    pub fn new(records: JsValue, filter: JsValue) -> Result<PackGenerator, JsValue> {
        console_error_panic_hook::set_once();

        let records: Vec<CardRecord> = serde_wasm_bindgen::from_value(records)
            .map_err(|e| JsValue::from_str(&format!("bad card records: {e}")))?;
        let filter: PoolFilter = if filter.is_undefined() || filter.is_null() {
            PoolFilter::none()
        } else {
            serde_wasm_bindgen::from_value(filter)
                .map_err(|e| JsValue::from_str(&format!("bad pool filter: {e}")))?
        };

        Ok(PackGenerator {
            partition: PoolPartition::from_records(&records, &filter),
            rng: StdRng::seed_from_u64(entropy_seed()),
        })
    }

    /// Reseeds the generator; two identically-seeded generators over the
    /// same card list produce identical runs.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Number of cards that survived filtering into the global pool.
    pub fn pool_size(&self) -> u32 {
        self.partition.global.len() as u32
    }

    /// Exhaustive generation. `partition_mode` is `"mixed"` or `"by_set"`;
    /// `rarity_mode` is `"peasant"` or `"standard"`. Returns the packs as a
    /// JS array; an empty array means the pool cannot fill a single pack.
    pub fn generate(&mut self, partition_mode: &str, rarity_mode: &str) -> Result<JsValue, JsValue> {
        let partition = PartitionMode::parse(partition_mode)
            .ok_or_else(|| JsValue::from_str(&format!("unknown partition mode: {partition_mode}")))?;
        let rarity = parse_rarity_mode(rarity_mode)?;

        let settings = GenerateSettings { partition, rarity };
        let packs = crate::generate::generate(&self.partition, &settings, &mut self.rng);
        serde_wasm_bindgen::to_value(&packs).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deals `total_packs` booster-box packs. With a `set_code` the box is
    /// drawn from that set's pool; with an empty string it is drawn from
    /// the merged pool. The result may be shorter than requested when the
    /// pool cannot fill an attempt.
    pub fn generate_booster_box(
        &mut self,
        set_code: &str,
        total_packs: u32,
        rarity_mode: &str,
    ) -> Result<JsValue, JsValue> {
        let rarity = parse_rarity_mode(rarity_mode)?;

        let packs = if set_code.is_empty() {
            crate::generate::generate_booster_box(
                &self.partition.global,
                MIXED_LABEL,
                total_packs,
                rarity,
                &mut self.rng,
            )
        } else {
            let set = self.partition.sets.get(set_code).ok_or_else(|| {
                JsValue::from_str(&format!("unknown set code: {set_code}"))
            })?;
            crate::generate::generate_booster_box(
                &set.pool,
                &set.name,
                total_packs,
                rarity,
                &mut self.rng,
            )
        };
        serde_wasm_bindgen::to_value(&packs).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
