pub mod nearest_n;
pub mod nearest_one;
pub mod range;
