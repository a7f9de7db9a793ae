pub mod config;
pub mod dispatch;
pub mod error;
pub mod response;
pub mod runner;
