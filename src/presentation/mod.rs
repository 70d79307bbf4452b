// Presentation layer - HTTP handlers, cookies and views
pub mod app_state;
pub mod cookies;
pub mod handlers;
pub mod view_model;
pub mod views;
