//! Deterministic RNG for protocol unit tests.

use rand::{CryptoRng, Error, RngCore};

/// Returns an all-zero key for 32-byte fills and a chosen raw value for the
/// 8-byte value draw, so `commit_with` produces a known secret value.
pub(crate) struct FixedRng {
    value: u64,
}

impl FixedRng {
    pub(crate) fn new(value: u64) -> Self {
        Self { value }
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.value as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if dest.len() == 8 {
            dest.copy_from_slice(&self.value.to_be_bytes());
        } else {
            dest.fill(0);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng {}

/// Fails every draw, standing in for a lost OS entropy source.
pub(crate) struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {}

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
        Err(Error::new(std::io::Error::from(
            std::io::ErrorKind::Unsupported,
        )))
    }
}

impl CryptoRng for FailingRng {}
