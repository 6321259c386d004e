pub mod clients;
pub mod db;
pub mod entries;
pub mod sessions;
