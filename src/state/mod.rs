pub mod data_model;
pub mod filter_chain;
pub mod option_sync;
pub mod row_store;
pub mod sort_selector;
