pub mod config;
pub mod eventos;
pub mod feedback;
pub mod filter;
pub mod manager;
