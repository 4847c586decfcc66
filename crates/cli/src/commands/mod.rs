mod compat;
mod config;
mod modules;
mod reference;
mod support;
mod value_type;

pub use compat::CompatArgs;
pub use compat::handle_compat;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use modules::ModulesArgs;
pub use modules::handle_modules;
pub use reference::RefArgs;
pub use reference::handle_ref;
pub use support::SupportArgs;
pub use support::handle_support;
pub use value_type::TypeArgs;
pub use value_type::handle_type;
