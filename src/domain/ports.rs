use super::catalog::Denomination;
use crate::error::ActuationError;
use async_trait::async_trait;

/// Display/log sink for machine notifications.
///
/// Fire and forget: implementations must never block the controller or fail
/// observably.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str);
}

/// Physical or simulated output hardware: the product dispenser and the coin
/// ejector.
///
/// Failures are best-effort signals. The controller logs them through the
/// notifier and proceeds; it never lets actuator health corrupt the credit
/// and change bookkeeping.
#[async_trait]
pub trait Actuator: Send + Sync {
    async fn dispense(&self, product_key: &str) -> Result<(), ActuationError>;
    async fn eject_coin(&self, denomination: &Denomination) -> Result<(), ActuationError>;
}

pub type NotifierBox = Box<dyn Notifier>;
pub type ActuatorBox = Box<dyn Actuator>;
