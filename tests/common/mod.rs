//! Common test utilities for portal-rbac

pub mod fixtures;

pub use fixtures::PolicyFactory;
