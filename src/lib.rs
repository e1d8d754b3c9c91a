pub mod app;
pub mod catalog;
pub mod config;
pub mod data_tables;
pub mod domain;
pub mod error;
pub mod output;
pub mod transfer;
