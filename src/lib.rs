//! Workspace-level integration tests for numkit.
//!
//! The tests themselves live in `tests/`; this library is intentionally empty.
