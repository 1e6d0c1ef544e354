pub mod changelog;
pub mod check;
pub mod config;
pub mod datasets;
