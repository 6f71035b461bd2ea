// tests/support/mod.rs
// Shared by several integration test binaries; each uses a different subset.
#[allow(dead_code, unused_imports)]
pub mod memory;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use memory::MemoryStore;
#[allow(unused_imports)]
pub use mocks::*;
