pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod help;
pub mod kitchen;
pub mod observability;
pub mod session;

pub use command::Command;
pub use config::Config;
pub use error::{CommandError, CommandResult};
pub use kitchen::Kitchen;
pub use session::{Flow, Reply, Session};

/// Build a session from the `[kitchen]` configuration section.
pub fn session_from_config(config: &config::KitchenConfig) -> fridgesavvy_shared::Result<Session> {
    Ok(Session::new(config.clock()?).with_expiring_window(config.expiring_window_days))
}
