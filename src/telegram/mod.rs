mod notifier;

pub use notifier::{NotifyError, TelegramConfig, TelegramNotifier};
