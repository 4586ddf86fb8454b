//! Controllable id generator for tests

use super::IdGenerator;
use crate::{Error, Result};
use parking_lot::Mutex;

/// Returns a settable id, or fails with a settable message
#[derive(Debug, Default)]
pub struct FakeIdGenerator {
    generated_id: Mutex<String>,
    generate_error: Mutex<Option<String>>,
}

impl FakeIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id returned by the next `generate` calls
    pub fn set_generated_id(&self, id: impl Into<String>) {
        *self.generated_id.lock() = id.into();
    }

    /// Make `generate` fail with this message; `None` clears it
    pub fn set_generate_error(&self, message: Option<&str>) {
        *self.generate_error.lock() = message.map(str::to_string);
    }
}

impl IdGenerator for FakeIdGenerator {
    fn generate(&self) -> Result<String> {
        if let Some(message) = self.generate_error.lock().clone() {
            return Err(Error::IdGeneration(message));
        }
        Ok(self.generated_id.lock().clone())
    }
}
