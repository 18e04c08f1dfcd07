use crate::domain::catalog::Denomination;
use crate::domain::money::Cents;
use crate::domain::ports::{Actuator, Notifier};
use crate::error::ActuationError;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A notifier that records every message behind a shared buffer.
///
/// Uses `Arc<RwLock<Vec<String>>>` so a clone handed to the machine and a
/// clone kept by the caller observe the same log. Stands in for a display
/// widget in tests.
#[derive(Default, Clone)]
pub struct BufferNotifier {
    messages: Arc<RwLock<Vec<String>>>,
}

impl BufferNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn messages(&self) -> Vec<String> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl Notifier for BufferNotifier {
    async fn notify(&self, message: &str) {
        let mut messages = self.messages.write().await;
        messages.push(message.to_string());
    }
}

/// Simulated dispenser and coin ejector for machines running without
/// hardware. Records what was actuated so the session can be inspected or
/// reported afterwards.
#[derive(Default, Clone)]
pub struct SimulatedActuator {
    dispensed: Arc<RwLock<Vec<String>>>,
    ejected: Arc<RwLock<Vec<String>>>,
}

impl SimulatedActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Product keys dispensed so far, in order.
    pub async fn dispensed(&self) -> Vec<String> {
        self.dispensed.read().await.clone()
    }

    /// Labels of coins ejected so far, in order.
    pub async fn ejected(&self) -> Vec<String> {
        self.ejected.read().await.clone()
    }

    pub async fn report(&self, remaining_credit: Cents) -> SessionReport {
        SessionReport {
            dispensed: self.dispensed().await,
            ejected: self.ejected().await,
            remaining_credit,
        }
    }
}

#[async_trait]
impl Actuator for SimulatedActuator {
    async fn dispense(&self, product_key: &str) -> Result<(), ActuationError> {
        let mut dispensed = self.dispensed.write().await;
        dispensed.push(product_key.to_string());
        Ok(())
    }

    async fn eject_coin(&self, denomination: &Denomination) -> Result<(), ActuationError> {
        let mut ejected = self.ejected.write().await;
        ejected.push(denomination.label.clone());
        Ok(())
    }
}

/// Summary of one simulated session, printed by the CLI with `--report`.
#[derive(Debug, Serialize, PartialEq)]
pub struct SessionReport {
    pub dispensed: Vec<String>,
    pub ejected: Vec<String>,
    pub remaining_credit: Cents,
}
