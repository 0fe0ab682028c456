pub mod allocation;
pub mod band;
pub mod ledger;
pub mod recommendation;
pub mod slot;
pub mod summary;
pub mod task;
