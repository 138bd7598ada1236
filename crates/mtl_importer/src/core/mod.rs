//! Core importer types shared by the library and its tools

pub mod config;

pub use config::ImportConfig;
