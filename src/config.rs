#[allow(clippy::module_inception)]
mod config;
mod theme;

pub use config::{Config, ConfigError, DEFAULT_NARROW_BREAKPOINT};
pub use theme::Theme;
