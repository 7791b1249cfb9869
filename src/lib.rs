pub mod actors;
pub mod cli;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod github;
pub mod models;
pub mod notify;
pub mod types;
pub mod view;
