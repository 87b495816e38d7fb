//! Individual command implementations.

mod clear;
mod copy;
mod form;
mod generate;
mod help;
mod password;
mod quit;
mod save;
mod user;
mod view;
mod website;

pub use clear::ClearCommand;
pub use copy::CopyCommand;
pub use form::FormCommand;
pub use generate::GenerateCommand;
pub use help::HelpCommand;
pub use password::PasswordCommand;
pub use quit::QuitCommand;
pub use save::SaveCommand;
pub use user::UserCommand;
pub use view::ViewCommand;
pub use website::WebsiteCommand;

use std::sync::Arc;

use super::command::CommandRegistry;

/// Registers all built-in commands with the registry.
pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(Arc::new(WebsiteCommand));
    registry.register(Arc::new(UserCommand));
    registry.register(Arc::new(PasswordCommand));
    registry.register(Arc::new(GenerateCommand));
    registry.register(Arc::new(FormCommand));
    registry.register(Arc::new(SaveCommand));
    registry.register(Arc::new(ClearCommand));
    registry.register(Arc::new(ViewCommand));
    registry.register(Arc::new(CopyCommand));
    registry.register(Arc::new(HelpCommand));
    registry.register(Arc::new(QuitCommand));
}
