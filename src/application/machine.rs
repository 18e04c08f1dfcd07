use crate::application::state::MachineState;
use crate::domain::catalog::{Catalog, Denomination};
use crate::domain::event::Event;
use crate::domain::money::Cents;
use crate::domain::ports::{ActuatorBox, NotifierBox};
use crate::error::Result;
use std::time::Duration;

/// Pause between ejected coins, matching the pacing of the physical return
/// slot.
const DEFAULT_EJECT_PAUSE: Duration = Duration::from_millis(200);

/// The vending machine controller.
///
/// Owns the active state, the accumulated credit, the pending change and the
/// catalog tables. Receives one external event at a time through `dispatch`
/// and delegates it to the active state; every side effect goes through the
/// injected `Notifier` and `Actuator` ports.
pub struct VendingMachine {
    catalog: Catalog,
    state: MachineState,
    credit: Cents,
    change_due: Cents,
    denominations_desc: Vec<Denomination>,
    notifier: NotifierBox,
    actuator: ActuatorBox,
    eject_pause: Duration,
}

impl VendingMachine {
    pub fn new(catalog: Catalog, notifier: NotifierBox, actuator: ActuatorBox) -> Self {
        let denominations_desc = catalog.denominations_desc();
        Self {
            catalog,
            state: MachineState::Waiting,
            credit: Cents::ZERO,
            change_due: Cents::ZERO,
            denominations_desc,
            notifier,
            actuator,
            eject_pause: DEFAULT_EJECT_PAUSE,
        }
    }

    pub fn with_eject_pause(mut self, pause: Duration) -> Self {
        self.eject_pause = pause;
        self
    }

    /// Announces the initial state. Call once after construction.
    pub async fn start(&mut self) -> Result<()> {
        self.notify(&format!("Entering {}", self.state.name())).await;
        let state = self.state.clone();
        if let Some(next) = state.on_entry(self).await? {
            self.transition_to(next).await?;
        }
        Ok(())
    }

    /// Single entry point for external events.
    ///
    /// Catalog keys are validated here, before the active state sees the
    /// event. The event is passed by value and consumed by this call whether
    /// or not the state recognized it (one-shot semantics, no queueing).
    /// `dispatch` runs to completion, including any chained transitions and
    /// the greedy change pass, before returning.
    pub async fn dispatch(&mut self, event: Event) -> Result<()> {
        match &event {
            Event::CoinInserted(key) => {
                self.catalog.denomination(key)?;
            }
            Event::ProductSelected(key) => {
                self.catalog.product(key)?;
            }
            Event::ReturnRequested => {}
        }

        let state = self.state.clone();
        if let Some(next) = state.update(self, &event).await? {
            self.transition_to(next).await?;
        }
        Ok(())
    }

    /// Selects a product by catalog key, delegating to the active state.
    pub async fn select_product(&mut self, key: &str) -> Result<()> {
        self.dispatch(Event::ProductSelected(key.to_string())).await
    }

    /// Requests a coin return, delegating to the active state.
    pub async fn request_return(&mut self) -> Result<()> {
        self.dispatch(Event::ReturnRequested).await
    }

    pub fn credit(&self) -> Cents {
        self.credit
    }

    pub fn change_due(&self) -> Cents {
        self.change_due
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub(crate) async fn notify(&self, message: &str) {
        self.notifier.notify(message).await;
    }

    /// Swaps the active state: exit action, swap, entry action. Entry actions
    /// may chain further transitions (delivery into change return into
    /// waiting); the loop drains the chain so the whole cascade completes
    /// before the caller's `dispatch` returns.
    pub(crate) async fn transition_to(&mut self, target: MachineState) -> Result<()> {
        let mut target = target;
        loop {
            let current = self.state.clone();
            self.notify(&format!("Exiting {}", current.name())).await;
            current.on_exit(self).await;

            self.notify(&format!("Entering {}", target.name())).await;
            self.state = target.clone();

            match target.on_entry(self).await? {
                Some(next) => target = next,
                None => return Ok(()),
            }
        }
    }

    /// Credits one inserted coin and reports the running total. Notification
    /// only; transitions are decided by the active state.
    pub async fn add_coin(&mut self, key: &str) -> Result<()> {
        let denomination = self.catalog.denomination(key)?.clone();
        self.credit += denomination.value;
        self.notify(&format!(
            "Inserted {} ({}). Total: {}.",
            denomination.label, denomination.value, self.credit
        ))
        .await;
        Ok(())
    }

    /// Moves the whole credit into pending change for a requested return.
    pub(crate) fn cash_out_credit(&mut self) {
        self.change_due = self.credit;
        self.credit = Cents::ZERO;
    }

    /// Checks the selected product against the accumulated credit. Reports
    /// the shortfall and stays put when credit is insufficient; credit is
    /// never touched on a failed purchase attempt.
    pub(crate) async fn try_purchase(&mut self, key: &str) -> Result<Option<MachineState>> {
        let product = self.catalog.product(key)?.clone();
        if self.credit >= product.price {
            Ok(Some(MachineState::DispensingProduct {
                product: key.to_string(),
            }))
        } else {
            let need = product.price - self.credit;
            self.notify(&format!("Need {} more.", need)).await;
            Ok(None)
        }
    }

    /// Entry action of `DispensingProduct`: actuate the dispenser (best
    /// effort), then settle the credit into pending change.
    pub(crate) async fn deliver_product(&mut self, key: &str) -> Result<MachineState> {
        let product = self.catalog.product(key)?.clone();
        self.notify(&format!("Dispensing {}...", product.name)).await;

        if let Err(e) = self.actuator.dispense(key).await {
            self.notify(&format!("Dispense failed: {e}")).await;
        }

        self.change_due = self.credit - product.price;
        self.credit = Cents::ZERO;

        if self.change_due > Cents::ZERO {
            Ok(MachineState::ReturningChange)
        } else {
            Ok(MachineState::Waiting)
        }
    }

    /// Entry action of `ReturningChange`: the greedy pass. Largest
    /// denominations first, ejecting one coin per unit until the pending
    /// change no longer covers the value, pacing each ejection.
    pub(crate) async fn count_change(&mut self) {
        let coins = self.denominations_desc.clone();
        for denomination in &coins {
            while self.change_due >= denomination.value {
                self.notify(&format!("Returning {}", denomination.value)).await;
                if let Err(e) = self.actuator.eject_coin(denomination).await {
                    self.notify(&format!("Coin ejection failed: {e}")).await;
                }
                self.change_due -= denomination.value;
                tokio::time::sleep(self.eject_pause).await;
            }
        }
    }
}
