pub mod app;
pub mod config;
pub mod menu;
pub mod navigation;
pub mod orchestrator;
pub mod routing;
pub mod services;
pub mod shared;
pub mod source;
