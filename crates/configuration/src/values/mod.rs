mod execution_settings;
mod secret;
mod uri;

pub use execution_settings::ExecutionSettings;
pub use secret::Secret;
pub use uri::{ApiKey, EndpointUri};
