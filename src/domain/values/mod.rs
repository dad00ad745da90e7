pub mod asset;
pub mod lenient;
