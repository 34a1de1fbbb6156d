pub mod directory;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod resolve;
