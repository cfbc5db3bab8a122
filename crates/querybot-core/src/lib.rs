pub mod ports;
pub mod session_store;
pub mod engine;
pub mod event_bus;
pub mod prefs;
