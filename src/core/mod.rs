// Public modules
pub mod defaults;
pub mod error;
pub mod files;
pub mod front_matter;
pub mod git;
pub mod locale;
pub mod output;
pub mod paths;
pub mod project_config;
pub mod prompt;
pub mod scaffold;
pub mod site;
pub mod templates;
pub mod update;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use locale::{LocaleTable, LocaleValue, MissingLocalePolicy};
pub use output::{BatchResult, BatchResultItem};
pub use site::SiteHelpers;
