//! Authentication: password hashing, session key, and caller guards.

#[cfg(feature = "server")]
mod guard;
#[cfg(feature = "server")]
mod password;
mod session;

#[cfg(feature = "server")]
pub use guard::{caller_role, require_admin, require_user};
#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
pub use session::SESSION_USER_ID_KEY;
