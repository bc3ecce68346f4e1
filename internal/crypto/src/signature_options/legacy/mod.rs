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


//! Translation of legacy signature parameter strings into
//! [`SignatureOptions`].
//!
//! Older APIs configured signatures with a single free-form string whose
//! meaning depends on the algorithm, such as `"EMSA-PSS(SHA-256,MGF1,32)"`
//! for RSA, `"Ed25519ph"` for Ed25519, or `"UserA,SM3"` for SM2. Each
//! [`AlgorithmFamily`] has its own grammar; the table below maps every family
//! to the function implementing it.

use log::debug;

use crate::{
    descriptor::StructuredDescriptor,
    settings::{get_settings, LegacySettings},
    signature_options::{
        AlgorithmFamily, Result, SignatureFormat, SignatureOptions, SignatureOptionsError,
    },
};

pub mod rsa;

/// Signature of a per-family legacy grammar.
type LegacyGrammar = fn(&LegacySettings, &str, SignatureFormat) -> Result<SignatureOptions>;

static LEGACY_GRAMMARS: [(AlgorithmFamily, LegacyGrammar); 7] = [
    (AlgorithmFamily::Dilithium, parse_pqc),
    (AlgorithmFamily::SphincsPlus, parse_pqc),
    (AlgorithmFamily::Sm2, parse_sm2),
    (AlgorithmFamily::Ed25519, parse_ed25519),
    (AlgorithmFamily::Ed448, parse_ed448),
    (AlgorithmFamily::Rsa, rsa::parse_rsa),
    (AlgorithmFamily::Generic, parse_generic),
];

fn grammar_for(family: AlgorithmFamily) -> LegacyGrammar {
    LEGACY_GRAMMARS
        .iter()
        .find(|(f, _)| *f == family)
        .map(|(_, grammar)| *grammar)
        .unwrap_or(parse_generic)
}

/// Translates `(algorithm name, legacy parameters, format)` triples into
/// [`SignatureOptions`].
#[derive(Clone, Debug, Default)]
pub struct LegacyOptionsFactory {
    settings: LegacySettings,
}

impl LegacyOptionsFactory {
    /// Return a factory using the given settings.
    pub fn new(settings: LegacySettings) -> Self {
        Self { settings }
    }

    /// Return a factory using a snapshot of the current
    /// [settings](crate::settings).
    pub fn from_current_settings() -> Self {
        Self::new(
            get_settings()
                .map(|settings| settings.legacy().clone())
                .unwrap_or_default(),
        )
    }

    /// Parse `legacy_params` using the grammar for `algorithm_name`.
    ///
    /// `format` only affects ECDSA-style algorithms.
    pub fn parse(
        &self,
        algorithm_name: &str,
        legacy_params: &str,
        format: SignatureFormat,
    ) -> Result<SignatureOptions> {
        let family = AlgorithmFamily::from_algorithm_name(algorithm_name);
        let options = self.parse_for_family(family, legacy_params, format)?;

        debug!(
            "legacy parameters '{legacy_params}' for {algorithm_name} ({family}) parsed as {options:?}"
        );

        Ok(options)
    }

    /// Parse `legacy_params` using the grammar for `family` directly.
    pub fn parse_for_family(
        &self,
        family: AlgorithmFamily,
        legacy_params: &str,
        format: SignatureFormat,
    ) -> Result<SignatureOptions> {
        grammar_for(family)(&self.settings, legacy_params, format)
    }
}

/// Parse legacy parameters with the default settings.
///
/// Equivalent to `LegacyOptionsFactory::default().parse(..)`.
pub fn parse_legacy_options(
    algorithm_name: &str,
    legacy_params: &str,
    format: SignatureFormat,
) -> Result<SignatureOptions> {
    LegacyOptionsFactory::default().parse(algorithm_name, legacy_params, format)
}

fn parse_pqc(
    _settings: &LegacySettings,
    params: &str,
    _format: SignatureFormat,
) -> Result<SignatureOptions> {
    match params {
        "" | "Randomized" => Ok(SignatureOptions::new()),
        "Deterministic" => Ok(SignatureOptions::new().with_deterministic_signature()),
        _ => Err(SignatureOptionsError::InvalidArgument(format!(
            "unexpected parameters '{params}' (expected 'Randomized' or 'Deterministic')"
        ))),
    }
}

fn parse_sm2(
    settings: &LegacySettings,
    params: &str,
    _format: SignatureFormat,
) -> Result<SignatureOptions> {
    if params.is_empty() {
        return SignatureOptions::new().with_hash(&settings.sm2_default_hash);
    }

    let (userid, hash) = params
        .split_once(',')
        .unwrap_or((params, settings.sm2_default_hash.as_str()));

    SignatureOptions::new()
        .with_context(userid)?
        .with_hash(hash)
}

fn parse_ed25519(
    _settings: &LegacySettings,
    params: &str,
    _format: SignatureFormat,
) -> Result<SignatureOptions> {
    parse_eddsa(params, &["", "Identity", "Pure"], "Ed25519ph")
}

fn parse_ed448(
    _settings: &LegacySettings,
    params: &str,
    _format: SignatureFormat,
) -> Result<SignatureOptions> {
    parse_eddsa(params, &["", "Identity", "Pure", "Ed448"], "Ed448ph")
}

// Anything that is neither a pure alias nor the prehash trigger names the
// prehash function.
fn parse_eddsa(
    params: &str,
    pure_aliases: &[&str],
    default_prehash: &str,
) -> Result<SignatureOptions> {
    if pure_aliases.iter().any(|alias| *alias == params) {
        Ok(SignatureOptions::new())
    } else if params == default_prehash {
        SignatureOptions::new().with_prehash(None)
    } else {
        SignatureOptions::new().with_prehash(Some(params))
    }
}

fn parse_generic(
    _settings: &LegacySettings,
    params: &str,
    format: SignatureFormat,
) -> Result<SignatureOptions> {
    let mut options = SignatureOptions::new();

    if params.starts_with("EMSA1") {
        let req = StructuredDescriptor::parse(params)?;
        let hash = req.arg(0).ok_or_else(|| {
            SignatureOptionsError::InvalidArgument(format!(
                "'{params}' does not name a hash function"
            ))
        })?;
        options = options.with_hash(hash)?;
    } else if !params.is_empty() {
        options = options.with_hash(params)?;
    }

    if format == SignatureFormat::DerSequence {
        options = options.with_der_encoded_signature();
    }

    Ok(options)
}
