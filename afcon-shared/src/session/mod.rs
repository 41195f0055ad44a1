//! Client-side session and the route guard built on it.

mod guard;
mod state;
mod store;

pub use guard::{GuardDecision, LOGIN_PATH};
pub use state::{Session, SessionStatus};
pub use store::{LocalSessionCell, SessionApi, SessionCell, SessionStore};
