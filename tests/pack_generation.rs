use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use packsmith::{
    CardRecord, GenerateSettings, Pack, PartitionMode, PoolFilter, PoolPartition, Rarity,
    RarityMode, build_pack, generate,
};

fn record(name: &str, rarity: &str, set: &str, set_name: &str) -> CardRecord {
    CardRecord {
        id: format!("{set}-{name}"),
        name: name.into(),
        rarity: rarity.into(),
        type_line: "Creature — Test".into(),
        set_type: "expansion".into(),
        layout: "normal".into(),
        color_identity: Vec::new(),
        image: None,
        set: set.into(),
        set_name: set_name.into(),
    }
}

/// `count` uniquely-named records of one rarity for one set.
fn batch(count: usize, rarity: &str, set: &str, set_name: &str) -> Vec<CardRecord> {
    (0..count)
        .map(|i| record(&format!("{set_name} {rarity} {i}"), rarity, set, set_name))
        .collect()
}

fn partition(records: &[CardRecord]) -> PoolPartition {
    PoolPartition::from_records(records, &PoolFilter::none())
}

fn assert_well_formed(pack: &Pack, rarity_mode: RarityMode) {
    assert_eq!(pack.cards.len(), rarity_mode.pack_size());

    let commons = pack.cards.iter().filter(|c| c.rarity == Rarity::Common).count();
    let uncommons = pack.cards.iter().filter(|c| c.rarity == Rarity::Uncommon).count();
    assert_eq!(commons, 10);
    assert_eq!(uncommons, 3);
    if rarity_mode.has_rare_slot() {
        let top = pack
            .cards
            .iter()
            .filter(|c| matches!(c.rarity, Rarity::Rare | Rarity::Mythic))
            .count();
        assert_eq!(top, 1);
    }

    let mut names = HashSet::new();
    for card in &pack.cards {
        assert!(names.insert(card.name.clone()), "duplicate {} in pack {}", card.name, pack.id);
    }

    let weights: Vec<u8> = pack.cards.iter().map(|c| c.rarity.weight()).collect();
    assert!(weights.windows(2).all(|w| w[0] >= w[1]), "pack {} out of order", pack.id);
}

#[test]
fn peasant_supply_yields_exactly_two_packs() {
    // 20 commons and 8 uncommons support min(20/10, 8/3) = 2 peasant packs;
    // the third attempt must fail on uncommons.
    let mut records = batch(20, "common", "aaa", "Alpha");
    records.extend(batch(8, "uncommon", "aaa", "Alpha"));
    let partition = partition(&records);

    let settings = GenerateSettings {
        partition: PartitionMode::Mixed,
        rarity: RarityMode::Peasant,
    };

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let packs = generate(&partition, &settings, &mut rng);

        assert_eq!(packs.len(), 2, "seed {seed}");
        for pack in &packs {
            assert_well_formed(pack, RarityMode::Peasant);
        }
        assert_eq!(packs[0].id, 1);
        assert_eq!(packs[1].id, 2);
    }
}

#[test]
fn duplicate_copy_is_deferred_for_the_next_pack() {
    // Eleven commons, two of them named "Shock": the first pack draws ten
    // distinct names and the colliding copy survives in the residual pool.
    let mut records = batch(10, "common", "aaa", "Alpha");
    records.push(record("Shock", "common", "aaa", "Alpha"));
    // Record 0 is renamed so the duplicate pair is explicit.
    records[0] = record("Shock", "common", "aaa", "Alpha");
    records.extend(batch(3, "uncommon", "aaa", "Alpha"));
    let partition = partition(&records);

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = partition.global.shuffled(&mut rng);
        let (pack, residual) =
            build_pack(pool, 1, "Alpha", RarityMode::Peasant, &mut rng).expect("one full pack");

        assert_well_formed(&pack, RarityMode::Peasant);
        let shocks_in_pack = pack.cards.iter().filter(|c| c.name == "Shock").count();
        assert_eq!(shocks_in_pack, 1, "seed {seed}");

        // The second copy was requeued, not destroyed.
        assert_eq!(residual.commons.len(), 1);
        assert_eq!(residual.commons[0].name, "Shock");
    }
}

#[test]
fn lone_rare_always_fills_the_rare_slot() {
    // No mythics at all: the 1-in-8 upgrade must fall back to the rare
    // bucket every time instead of leaving the slot empty.
    let mut records = batch(10, "common", "aaa", "Alpha");
    records.extend(batch(3, "uncommon", "aaa", "Alpha"));
    records.extend(batch(1, "rare", "aaa", "Alpha"));
    let partition = partition(&records);

    let settings = GenerateSettings {
        partition: PartitionMode::Mixed,
        rarity: RarityMode::Standard,
    };

    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let packs = generate(&partition, &settings, &mut rng);

        assert_eq!(packs.len(), 1, "seed {seed}");
        assert_well_formed(&packs[0], RarityMode::Standard);
        assert_eq!(packs[0].cards[0].rarity, Rarity::Rare);
    }
}

#[test]
fn by_set_generation_keeps_sets_apart_and_ids_global() {
    // Alpha supports one peasant pack, Beta supports three.
    let mut records = batch(10, "common", "aaa", "Alpha");
    records.extend(batch(3, "uncommon", "aaa", "Alpha"));
    records.extend(batch(30, "common", "bbb", "Beta"));
    records.extend(batch(9, "uncommon", "bbb", "Beta"));
    let partition = partition(&records);

    let settings = GenerateSettings {
        partition: PartitionMode::BySet,
        rarity: RarityMode::Peasant,
    };

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let packs = generate(&partition, &settings, &mut rng);

        assert_eq!(packs.len(), 4, "seed {seed}");
        let ids: Vec<u32> = packs.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        assert_eq!(packs[0].label, "Alpha");
        for pack in &packs[1..] {
            assert_eq!(pack.label, "Beta");
        }

        // No card leaks across set boundaries.
        for pack in &packs {
            let expected_code = if pack.label == "Alpha" { "aaa" } else { "bbb" };
            for card in &pack.cards {
                assert_eq!(card.set_code, expected_code);
            }
            assert_well_formed(pack, RarityMode::Peasant);
        }
    }
}

#[test]
fn mixed_run_conserves_the_pool_and_halts_when_spent() {
    // 35 commons, 10 uncommons, 2 rares: the rare bucket caps the run at
    // two standard packs even though commons could fill a third.
    let mut records = batch(35, "common", "aaa", "Alpha");
    records.extend(batch(10, "uncommon", "aaa", "Alpha"));
    records.extend(batch(2, "rare", "aaa", "Alpha"));
    let partition = partition(&records);

    let settings = GenerateSettings {
        partition: PartitionMode::Mixed,
        rarity: RarityMode::Standard,
    };

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let packs = generate(&partition, &settings, &mut rng);

        assert_eq!(packs.len(), 2, "seed {seed}");

        // Every dealt copy exists in the input pool and is dealt only once.
        let pool_ids: HashSet<_> = partition
            .global
            .bucket(Rarity::Common)
            .iter()
            .chain(partition.global.bucket(Rarity::Uncommon))
            .chain(partition.global.bucket(Rarity::Rare))
            .chain(partition.global.bucket(Rarity::Mythic))
            .map(|c| c.id)
            .collect();
        let mut dealt = HashSet::new();
        for pack in &packs {
            for card in &pack.cards {
                assert!(pool_ids.contains(&card.id), "fabricated card {}", card.name);
                assert!(dealt.insert(card.id), "card dealt twice: {}", card.name);
            }
        }
    }
}

#[test]
fn empty_pool_generates_no_packs() {
    let partition = partition(&[]);
    let settings = GenerateSettings {
        partition: PartitionMode::Mixed,
        rarity: RarityMode::Peasant,
    };
    let mut rng = StdRng::seed_from_u64(0);
    assert!(generate(&partition, &settings, &mut rng).is_empty());
}

#[test]
fn same_seed_reproduces_the_run() {
    let mut records = batch(40, "common", "aaa", "Alpha");
    records.extend(batch(12, "uncommon", "aaa", "Alpha"));
    records.extend(batch(4, "rare", "aaa", "Alpha"));
    records.extend(batch(2, "mythic", "aaa", "Alpha"));
    let partition = partition(&records);

    let settings = GenerateSettings {
        partition: PartitionMode::Mixed,
        rarity: RarityMode::Standard,
    };

    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        generate(&partition, &settings, &mut rng)
            .iter()
            .map(|p| p.cards.iter().map(|c| c.name.clone()).collect::<Vec<_>>())
            .collect::<Vec<_>>()
    };

    assert_eq!(run(99), run(99));
    assert_ne!(run(99), run(100));
}
