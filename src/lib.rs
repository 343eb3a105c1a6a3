pub mod config;
pub mod entity;
pub mod fake;
pub mod generator;
pub mod statement;
pub mod value;
pub mod writer;
