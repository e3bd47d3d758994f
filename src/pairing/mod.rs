pub mod engine;
pub mod types;

pub use engine::pair_adjacent;
pub use types::Pairing;
