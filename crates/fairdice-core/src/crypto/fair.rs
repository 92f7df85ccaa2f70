//! Commit-reveal protocol over a secret integer in `[0, range)`.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::{CryptoError, Digest, SecretKey};

/// One commit-reveal round.
///
/// A round is created fresh per protocol invocation and never reused. Only
/// the digest is published at commit time; the key and value stay withheld
/// until the counterpart's contribution has been fixed.
pub struct FairRound {
    key: SecretKey,
    value: u64,
    range: u64,
    digest: Digest,
}

/// The withheld fields, disclosed after the counterpart has contributed
#[derive(Clone, Debug)]
pub struct Reveal {
    pub secret_key: SecretKey,
    pub secret_value: u64,
}

impl Reveal {
    /// Recompute the digest and check it against the published one
    pub fn verify(&self, published: &Digest) -> bool {
        published.verify(&self.secret_key, self.secret_value)
    }
}

impl FairRound {
    /// Commit to a fresh uniform value in `[0, range)` using OS entropy
    pub fn commit(range: u64) -> Result<Self, CryptoError> {
        Self::commit_with(range, &mut OsRng)
    }

    /// Commit using a caller-supplied secure RNG.
    ///
    /// Exists so tests can drive the protocol deterministically and assert
    /// exact combined outputs.
    pub fn commit_with<R: RngCore + CryptoRng>(
        range: u64,
        rng: &mut R,
    ) -> Result<Self, CryptoError> {
        debug_assert!(range >= 2, "a single-outcome range has nothing to commit to");
        let key = SecretKey::random_with(rng)?;
        let value = uniform(range, rng)?;
        let digest = Digest::new(&key, value);
        Ok(Self {
            key,
            value,
            range,
            digest,
        })
    }

    /// The published commitment digest
    pub fn digest(&self) -> Digest {
        self.digest
    }

    /// The committed range
    pub fn range(&self) -> u64 {
        self.range
    }

    /// Disclose the withheld key and value.
    ///
    /// Re-checks the binding first so a broken or tampered round fails
    /// loudly instead of leaking an unverifiable reveal.
    pub fn reveal(self) -> Result<Reveal, CryptoError> {
        let reveal = Reveal {
            secret_key: self.key,
            secret_value: self.value,
        };
        if !reveal.verify(&self.digest) {
            return Err(CryptoError::CommitmentMismatch);
        }
        Ok(reveal)
    }
}

/// Combine both parties' contributions into the fair output.
///
/// Commutative modulo `range`: neither party can bias the result by
/// delaying disclosure once both values are fixed.
pub fn combine(secret: u64, counterpart: u64, range: u64) -> u64 {
    ((secret % range) + (counterpart % range)) % range
}

/// Uniform draw in `[0, range)` by rejection sampling, so ranges that do
/// not divide 2^64 stay unbiased.
fn uniform<R: RngCore>(range: u64, rng: &mut R) -> Result<u64, CryptoError> {
    let zone = u64::MAX - (u64::MAX % range);
    loop {
        let mut buf = [0u8; 8];
        rng.try_fill_bytes(&mut buf)
            .map_err(CryptoError::EntropySource)?;
        let raw = u64::from_be_bytes(buf);
        if raw < zone {
            return Ok(raw % range);
        }
    }
}
