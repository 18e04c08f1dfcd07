pub mod catalog;
pub mod event;
pub mod money;
pub mod ports;
