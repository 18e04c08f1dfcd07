use crate::application::machine::VendingMachine;
use crate::domain::event::Event;
use crate::error::Result;

/// The machine's behavior variants. Exactly one is active at any time.
///
/// Each variant implements the same capability set (`update`, `on_entry`,
/// `on_exit`); the controller selects behavior by matching on the tag rather
/// than through open subclassing. `DispensingProduct` carries the key of the
/// product selected while accumulating credit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineState {
    Waiting,
    AccumulatingCredit,
    DispensingProduct { product: String },
    ReturningChange,
}

impl MachineState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::AccumulatingCredit => "add_coins",
            Self::DispensingProduct { .. } => "deliver_product",
            Self::ReturningChange => "count_change",
        }
    }

    /// Handles one event, returning the transition it triggers, if any.
    ///
    /// Events a state does not recognize are dropped: no transition, no
    /// error, no change to the controller.
    pub(crate) async fn update(
        &self,
        machine: &mut VendingMachine,
        event: &Event,
    ) -> Result<Option<MachineState>> {
        match self {
            Self::Waiting => match event {
                Event::CoinInserted(key) => {
                    machine.add_coin(key).await?;
                    Ok(Some(Self::AccumulatingCredit))
                }
                _ => Ok(None),
            },
            Self::AccumulatingCredit => match event {
                Event::ReturnRequested => {
                    machine.cash_out_credit();
                    Ok(Some(Self::ReturningChange))
                }
                Event::CoinInserted(key) => {
                    machine.add_coin(key).await?;
                    Ok(None)
                }
                Event::ProductSelected(key) => machine.try_purchase(key).await,
            },
            // Delivery and change counting run as entry actions and consume
            // no events; a return request mid-dispense is ignored.
            Self::DispensingProduct { .. } | Self::ReturningChange => Ok(None),
        }
    }

    /// Runs the state's entry action, returning a follow-up transition if the
    /// action chains into another state.
    pub(crate) async fn on_entry(
        &self,
        machine: &mut VendingMachine,
    ) -> Result<Option<MachineState>> {
        match self {
            Self::Waiting => {
                machine.notify("Waiting for coins...").await;
                Ok(None)
            }
            Self::AccumulatingCredit => Ok(None),
            Self::DispensingProduct { product } => Ok(Some(machine.deliver_product(product).await?)),
            Self::ReturningChange => {
                machine.count_change().await;
                Ok(Some(Self::Waiting))
            }
        }
    }

    pub(crate) async fn on_exit(&self, _machine: &mut VendingMachine) {}
}
