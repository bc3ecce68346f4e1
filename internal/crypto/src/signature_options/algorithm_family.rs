// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.


use std::fmt;

#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Groups signature algorithms that share a legacy parameter grammar.
///
/// Every algorithm name maps to exactly one family. Names that are not
/// recognized fall into [`AlgorithmFamily::Generic`], which covers ECDSA,
/// DSA, ECKCDSA, GOST 34.10 and similar hash-then-sign schemes.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[non_exhaustive]
pub enum AlgorithmFamily {
    /// CRYSTALS-Dilithium and ML-DSA
    Dilithium,

    /// SPHINCS+ and SLH-DSA
    SphincsPlus,

    /// SM2 signatures
    Sm2,

    /// Ed25519 (pure and prehashed)
    Ed25519,

    /// Ed448 (pure and prehashed)
    Ed448,

    /// RSA with an explicit padding scheme
    Rsa,

    /// ECDSA, DSA, ECKCDSA, GOST and other hash-then-sign schemes
    Generic,
}

impl AlgorithmFamily {
    /// Return the family an algorithm name belongs to.
    pub fn from_algorithm_name(name: &str) -> Self {
        match name {
            "SM2" => Self::Sm2,
            "Ed25519" => Self::Ed25519,
            "Ed448" => Self::Ed448,
            "RSA" => Self::Rsa,
            _ if name.starts_with("Dilithium") || name.starts_with("ML-DSA") => Self::Dilithium,
            _ if name.starts_with("SPHINCS+") || name.starts_with("SLH-DSA") => Self::SphincsPlus,
            _ => Self::Generic,
        }
    }
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}",
            match self {
                Self::Dilithium => "Dilithium",
                Self::SphincsPlus => "SPHINCS+",
                Self::Sm2 => "SM2",
                Self::Ed25519 => "Ed25519",
                Self::Ed448 => "Ed448",
                Self::Rsa => "RSA",
                Self::Generic => "generic",
            }
        )
    }
}
