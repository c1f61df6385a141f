pub mod auth;
pub mod cache;
pub mod db;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod providers;
pub mod ws;

pub use db::create_pool;
