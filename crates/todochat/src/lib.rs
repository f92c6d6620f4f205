pub mod chat;
pub mod errors;
pub mod models;
pub mod pages;
pub mod store;
