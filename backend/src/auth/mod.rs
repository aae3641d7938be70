//! Request authentication
//!
//! Session tokens are opaque rows in `user_sessions`; this module only
//! checks them. Issuing credentials (password hashing, token minting) is
//! the caller's concern and deliberately absent here.

mod session;

pub use session::SessionUser;
