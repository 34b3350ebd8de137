pub mod balance;
pub mod speed;
pub mod trigrams;
