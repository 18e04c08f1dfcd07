use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;
use vendo::application::machine::VendingMachine;
use vendo::domain::catalog::Catalog;
use vendo::domain::ports::{ActuatorBox, NotifierBox};
use vendo::infrastructure::console::ConsoleNotifier;
use vendo::infrastructure::simulated::SimulatedActuator;
use vendo::interfaces::csv::event_reader::EventReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input events CSV file (header `type,key`; rows like `coin,quarter`,
    /// `select,p2`, `return,`)
    input: PathBuf,

    /// Pause between ejected coins, in milliseconds
    #[arg(long, default_value_t = 200)]
    eject_delay_ms: u64,

    /// Print a JSON session report (dispensed products, ejected coins,
    /// remaining credit) on exit
    #[arg(long)]
    report: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = Catalog::standard().into_diagnostic()?;
    let actuator = SimulatedActuator::new();

    let notifier: NotifierBox = Box::new(ConsoleNotifier::new());
    let machine_actuator: ActuatorBox = Box::new(actuator.clone());

    let mut machine = VendingMachine::new(catalog, notifier, machine_actuator)
        .with_eject_pause(Duration::from_millis(cli.eject_delay_ms));
    machine.start().await.into_diagnostic()?;

    // Feed events one at a time; bad rows and rejected events are reported
    // and skipped, the machine keeps running.
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = EventReader::new(file);
    for event_result in reader.events() {
        match event_result {
            Ok(event) => {
                if let Err(e) = machine.dispatch(event).await {
                    eprintln!("Error processing event: {e}");
                }
            }
            Err(e) => {
                eprintln!("Error reading event: {e}");
            }
        }
    }

    if cli.report {
        let report = actuator.report(machine.credit()).await;
        println!(
            "{}",
            serde_json::to_string_pretty(&report).into_diagnostic()?
        );
    }

    Ok(())
}
