pub mod analysis;
pub mod fixture;
pub mod opponent;
