//! Testing utilities and mock implementations.
//!
//! The mocks implement the crate's traits without touching the file system,
//! so orchestrator behavior can be asserted in isolation.

mod mock_relocator;

pub use mock_relocator::MockRelocator;
