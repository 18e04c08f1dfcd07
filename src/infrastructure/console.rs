use crate::domain::ports::Notifier;
use async_trait::async_trait;

/// Prints machine notifications to stdout, the display surface of the CLI.
#[derive(Default, Clone)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, message: &str) {
        println!("{message}");
    }
}
