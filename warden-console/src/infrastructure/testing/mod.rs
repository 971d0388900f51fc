//! In-memory stand-ins for the remote services.
//!
//! Used when the console runs with `use_test_stubs` and by the test suite.
//! Each stub can be told to fail its next call so error paths can be
//! exercised without a server.

pub mod stubs;

pub use stubs::{
    InMemoryUserAdminService, StubCall, StubSessionService, sample_admin, sample_users,
};
