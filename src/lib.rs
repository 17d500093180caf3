pub mod config;
pub mod db;
pub mod error;
pub mod http_client;
pub mod mail;
pub mod middleware;
pub mod models;
pub mod proto;
pub mod services;
pub mod storage;
pub mod workflows;

pub use config::Config;
pub use error::{AppError, AppResult};
