pub mod capability;
pub mod config;
pub mod engine;
pub mod errors;
pub mod filter;
pub mod item;
pub mod scheduler;
pub mod search;
pub mod utils;
pub mod window;
