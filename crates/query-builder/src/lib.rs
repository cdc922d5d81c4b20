//! The visual query builder: a session that keeps a query model, its SQL and its
//! results together, and the collaborators it talks to.

pub mod error;
pub mod gateway;
pub mod notification;
pub mod session;
pub mod state;

pub use error::SessionError;
pub use gateway::{GatewayError, InMemoryGateway, SavedQueryGateway};
pub use notification::{Level, Notification, Notifier, TracingNotifier};
pub use session::Session;
pub use state::{create_state, InitializationError, State};
