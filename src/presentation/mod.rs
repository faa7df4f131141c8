// Presentation layer - HTTP handlers and server-rendered views
pub mod app_state;
pub mod components;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod views;
