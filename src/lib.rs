pub mod builder;
pub mod card;
pub mod color;
pub mod draw;
pub mod generate;
pub mod ids;
pub mod pool;
pub mod record;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm_api;

pub use builder::{Pack, build_box_pack, build_pack};
pub use card::{Card, Rarity};
pub use color::{Color, ColorSet};
pub use draw::{Draw, draw_unique, shuffled};
pub use generate::{
    GenerateSettings, MIXED_LABEL, PartitionMode, RarityMode, generate, generate_booster_box,
};
pub use ids::CopyId;
pub use pool::{Pool, PoolPartition, SetPool};
pub use record::{COMMANDER_SET_TYPES, CardRecord, PoolFilter, TOKEN_LAYOUTS};
