// Randomness sources for the fraud model
pub mod noise;
