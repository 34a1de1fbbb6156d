pub mod candidates;
pub mod query;
pub mod ui;
