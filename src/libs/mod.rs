pub mod aggregate;
pub mod client;
pub mod config;
pub mod data_storage;
pub mod entry;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod messages;
pub mod range;
pub mod timer;
pub mod view;
