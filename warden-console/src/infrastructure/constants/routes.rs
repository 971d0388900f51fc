//! API route constants for the Warden console
//!
//! All versioned API routes are prefixed with /api/v1

/// Base API path for versioned endpoints
pub const API_BASE: &str = "/api/v1";

pub mod v1 {
    /// Session endpoints
    pub mod session {
        /// The authenticated operator and its permissions
        pub const ME: &str = "/users/me";
    }

    /// Administrative user endpoints
    pub mod admin {
        /// List or create users; a single user lives one segment below
        pub const USERS: &str = "/admin/users";
    }
}
