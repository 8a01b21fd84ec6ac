pub mod actual;
pub mod config;
pub mod export;
pub mod period;
pub mod report;
pub mod resolver;
