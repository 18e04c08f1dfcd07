//! Application layer containing the vending control logic.
//!
//! This module defines the `VendingMachine` controller and the closed set of
//! machine states it delegates to. The controller owns all mutable state and
//! processes exactly one event at a time; side effects reach the outside
//! world only through the injected `Notifier` and `Actuator` ports.

pub mod machine;
pub mod state;
