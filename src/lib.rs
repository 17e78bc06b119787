pub mod applicants;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod form;
pub mod models;
pub mod notify;
pub mod output;
pub mod time_label;
