pub mod api;
mod context;
mod guard;

pub use context::{SessionProvider, SessionState, use_session};
pub use guard::RequireElevated;
