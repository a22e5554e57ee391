//! Reproducible randomness for the randomised operators.
//!
//! Numeric diffusion picks one of two arithmetic forms per literal and dead-code
//! insertion picks one of two snippets per function. A run driven by the same
//! seed makes the same picks, so `--seed` pins the obfuscated text.

use crate::result::Error;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};
use std::fmt;
use std::str::FromStr;

/// Domain tag mixed into the seed before it feeds an RNG.
const RNG_DOMAIN: &[u8] = b"RUSTVEIL_SOURCE_OBFUSCATION";

/// 32 bytes that fix every random pick of one pipeline run.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    inner: [u8; 32],
}

impl Seed {
    /// A fresh seed for a run whose output need not be reproduced.
    pub fn generate() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        Self { inner: seed }
    }

    /// Parses the 64 hex digits printed in a run report, `0x` prefix optional.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let hex = hex.trim();
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        if hex.len() != 64 {
            return Err(Error::InvalidSeedLength(hex.len()));
        }

        let mut seed = [0u8; 32];
        hex::decode_to_slice(hex, &mut seed).map_err(|_| Error::InvalidSeedHex)?;
        Ok(Self { inner: seed })
    }

    /// The form stored in run reports and accepted back by `--seed`.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.inner))
    }

    /// The RNG handed to the randomised operators for one run.
    pub fn create_deterministic_rng(&self) -> StdRng {
        let mut hasher = Sha3_256::new();
        hasher.update(RNG_DOMAIN);
        hasher.update(self.inner);
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        StdRng::from_seed(digest)
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::generate()
    }
}

impl FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Seed").field(&self.to_hex()).finish()
    }
}
