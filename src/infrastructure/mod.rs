pub mod console;
pub mod simulated;
