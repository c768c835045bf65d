pub mod mock;
pub mod preset;
