//! Id generation
//!
//! Tasks get their identifiers from an [`IdGenerator`]. Production code uses
//! [`UuidGenerator`]; tests drive [`FakeIdGenerator`] to control ids and failures.

mod fakes;

pub use fakes::FakeIdGenerator;

use crate::Result;

/// Produces globally unique identifiers
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Result<String>;
}

/// Random (v4) UUID generator
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> Result<String> {
        Ok(uuid::Uuid::new_v4().to_string())
    }
}
