//! Randomized checks of the greedy change pass over the production
//! denomination table {5, 10, 25, 100, 200}. The table is a canonical coin
//! system, so every multiple of 5 must reduce to exactly zero, largest coins
//! first.

use rand::prelude::*;
use std::time::Duration;
use vendo::application::machine::VendingMachine;
use vendo::application::state::MachineState;
use vendo::domain::catalog::Catalog;
use vendo::domain::event::Event;
use vendo::domain::money::Cents;
use vendo::infrastructure::simulated::{BufferNotifier, SimulatedActuator};

const COIN_KEYS: [&str; 5] = ["nickel", "dime", "quarter", "loonie", "toonie"];

fn label_value(label: &str) -> u32 {
    match label {
        "5c" => 5,
        "10c" => 10,
        "25c" => 25,
        "$1" => 100,
        "$2" => 200,
        other => panic!("unexpected coin label {other}"),
    }
}

fn fresh_machine() -> (VendingMachine, SimulatedActuator) {
    let actuator = SimulatedActuator::new();
    let machine = VendingMachine::new(
        Catalog::standard().unwrap(),
        Box::new(BufferNotifier::new()),
        Box::new(actuator.clone()),
    )
    .with_eject_pause(Duration::ZERO);
    (machine, actuator)
}

/// Inserts random coins, requests a return and checks the greedy pass:
/// terminates at zero, refunds exactly the credit, ejects in non-increasing
/// value order.
#[tokio::test]
async fn test_random_refunds_are_exact_and_greedy() {
    let mut rng = rand::thread_rng();

    for _ in 0..25 {
        let (mut machine, actuator) = fresh_machine();

        let coins = rng.gen_range(1..=12);
        let mut inserted = 0u32;
        for _ in 0..coins {
            let key = COIN_KEYS[rng.gen_range(0..COIN_KEYS.len())];
            machine
                .dispatch(Event::CoinInserted(key.to_string()))
                .await
                .unwrap();
            inserted += match key {
                "nickel" => 5,
                "dime" => 10,
                "quarter" => 25,
                "loonie" => 100,
                _ => 200,
            };
        }
        assert_eq!(machine.credit(), Cents::new(inserted));

        machine.dispatch(Event::ReturnRequested).await.unwrap();

        assert_eq!(machine.state(), &MachineState::Waiting);
        assert_eq!(machine.credit(), Cents::ZERO);
        assert_eq!(machine.change_due(), Cents::ZERO);

        let values: Vec<u32> = actuator
            .ejected()
            .await
            .iter()
            .map(|label| label_value(label))
            .collect();
        assert_eq!(values.iter().sum::<u32>(), inserted);
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }
}

/// Every amount expressible in the table (multiples of 5 up to $5) reduces
/// to zero. Amounts are built from nickels so the refund is the full credit.
#[tokio::test]
async fn test_all_small_amounts_reduce_to_zero() {
    for amount in (5u32..=500).step_by(5) {
        let (mut machine, actuator) = fresh_machine();

        for _ in 0..amount / 5 {
            machine
                .dispatch(Event::CoinInserted("nickel".to_string()))
                .await
                .unwrap();
        }
        machine.dispatch(Event::ReturnRequested).await.unwrap();

        assert_eq!(machine.change_due(), Cents::ZERO, "amount {amount}");
        let refunded: u32 = actuator
            .ejected()
            .await
            .iter()
            .map(|label| label_value(label))
            .sum();
        assert_eq!(refunded, amount, "amount {amount}");
    }
}

/// The worked change example: 75c comes back as three quarters, never as
/// smaller coins.
#[tokio::test]
async fn test_seventy_five_cents_is_three_quarters() {
    let (mut machine, actuator) = fresh_machine();

    for key in ["quarter", "quarter", "quarter"] {
        machine
            .dispatch(Event::CoinInserted(key.to_string()))
            .await
            .unwrap();
    }
    machine.dispatch(Event::ReturnRequested).await.unwrap();

    assert_eq!(
        actuator.ejected().await,
        vec!["25c".to_string(), "25c".to_string(), "25c".to_string()]
    );
}
