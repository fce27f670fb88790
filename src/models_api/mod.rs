pub mod analysis;
pub mod export;
pub mod fixture;
pub mod opponent;
