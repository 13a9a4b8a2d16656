//! Packsmith - booster pack generator
//!
//! CLI driver for dealing booster packs from a fetched card list.
//!
//! ## Usage
//!
//! ```
//! packsmith <cards.json> [OPTIONS]
//!
//! Options:
//!   --by-set              Deal each source set independently (default: mixed)
//!   --standard            10 commons + 3 uncommons + 1 rare/mythic (default)
//!   --peasant             10 commons + 3 uncommons, no rare slot
//!   --box N               Deal exactly N packs from the shared pool instead
//!                         of exhausting it (repeats across packs allowed)
//!   --seed S              Seed the RNG for a reproducible run
//!   --keep-basics         Keep basic lands in the pool
//!   --keep-commander-sets Keep commander-product sets in the pool
//!   --keep-tokens         Keep token/emblem/art-card records in the pool
//! ```
//!
//! The card list is a JSON array of collector card objects, e.g. the output
//! of the client's card-data fetch.

use std::env;
use std::fs;
use std::process;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use packsmith::{
    CardRecord, GenerateSettings, MIXED_LABEL, Pack, PartitionMode, PoolFilter, PoolPartition,
    RarityMode, generate, generate_booster_box,
};

#[derive(Debug)]
struct Args {
    cards_path: String,
    partition: PartitionMode,
    rarity: RarityMode,
    box_packs: Option<u32>,
    seed: Option<u64>,
    filter: PoolFilter,
}

fn usage() -> ! {
    eprintln!(
        "Usage: packsmith <cards.json> [--by-set] [--standard|--peasant] [--box N] [--seed S]\n\
         \x20                [--keep-basics] [--keep-commander-sets] [--keep-tokens]"
    );
    process::exit(1);
}

fn parse_args() -> Args {
    let mut cards_path = None;
    let mut partition = PartitionMode::Mixed;
    let mut rarity = RarityMode::Standard;
    let mut box_packs = None;
    let mut seed = None;
    let mut filter = PoolFilter::draft_playables();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--by-set" => partition = PartitionMode::BySet,
            "--standard" => rarity = RarityMode::Standard,
            "--peasant" => rarity = RarityMode::Peasant,
            "--box" => {
                let Some(n) = args.next().and_then(|v| v.parse().ok()) else {
                    eprintln!("--box needs a pack count");
                    usage();
                };
                box_packs = Some(n);
            }
            "--seed" => {
                let Some(s) = args.next().and_then(|v| v.parse().ok()) else {
                    eprintln!("--seed needs an integer");
                    usage();
                };
                seed = Some(s);
            }
            "--keep-basics" => filter.exclude_basic_lands = false,
            "--keep-commander-sets" => filter.exclude_commander_sets = false,
            "--keep-tokens" => filter.exclude_tokens = false,
            _ if arg.starts_with("--") => {
                eprintln!("Unknown option: {arg}");
                usage();
            }
            _ if cards_path.is_none() => cards_path = Some(arg),
            _ => usage(),
        }
    }

    let Some(cards_path) = cards_path else {
        usage();
    };

    Args {
        cards_path,
        partition,
        rarity,
        box_packs,
        seed,
        filter,
    }
}

fn load_records(path: &str) -> Vec<CardRecord> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Failed to read {path}: {err}");
            process::exit(1);
        }
    };
    match serde_json::from_str(&data) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("Failed to parse {path}: {err}");
            process::exit(1);
        }
    }
}

fn print_packs(packs: &[Pack]) {
    for pack in packs {
        println!("Pack #{} — {}", pack.id, pack.label);
        for card in &pack.cards {
            let colors = card.colors.symbols();
            let colors = if colors.is_empty() { "C" } else { &colors };
            println!(
                "  [{:>8}] {:<4} {}  ({})",
                card.rarity.as_str(),
                colors,
                card.name,
                card.set_code
            );
        }
        println!();
    }
}

fn main() {
    let args = parse_args();

    let records = load_records(&args.cards_path);
    println!("Loaded {} card records from {}", records.len(), args.cards_path);

    let partition = PoolPartition::from_records(&records, &args.filter);
    println!(
        "Pool: {} cards across {} sets ({} common / {} uncommon / {} rare / {} mythic)\n",
        partition.global.len(),
        partition.sets.len(),
        partition.global.commons.len(),
        partition.global.uncommons.len(),
        partition.global.rares.len(),
        partition.global.mythics.len(),
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::rng().random()),
    };

    let packs = match args.box_packs {
        Some(total) => {
            let packs =
                generate_booster_box(&partition.global, MIXED_LABEL, total, args.rarity, &mut rng);
            if packs.len() < total as usize {
                eprintln!(
                    "Note: only {} of {} requested packs could be filled",
                    packs.len(),
                    total
                );
            }
            packs
        }
        None => {
            let settings = GenerateSettings {
                partition: args.partition,
                rarity: args.rarity,
            };
            generate(&partition, &settings, &mut rng)
        }
    };

    if packs.is_empty() {
        eprintln!("Not enough cards for this configuration.");
        process::exit(1);
    }

    print_packs(&packs);
    println!(
        "{} packs, {} cards dealt",
        packs.len(),
        packs.iter().map(|p| p.cards.len()).sum::<usize>()
    );
}
