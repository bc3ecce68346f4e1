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


use crate::signature_options::{SignatureOptions, SignatureOptionsError};

/// An RSA padding scheme together with the parameters it was configured
/// with.
///
/// Obtained from [`SignatureOptions`] using `TryFrom`. Hash names are not
/// checked for availability; that is up to the consumer.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PaddingScheme {
    /// No padding; the input is signed as is, optionally after prehashing.
    Raw {
        /// Prehash function, if prehashing was requested.
        prehash: Option<String>,
    },

    /// PKCS #1 v1.5 with a DigestInfo for `hash`.
    Pkcs1v15 {
        /// Message hash.
        hash: String,
    },

    /// PKCS #1 v1.5 over an already computed digest.
    Pkcs1v15Raw {
        /// Hash that produced the digest, used for the DigestInfo prefix.
        prehash: Option<String>,
    },

    /// RSASSA-PSS with MGF1.
    Pss {
        /// Message hash.
        hash: String,

        /// Salt length; the scheme default when `None`.
        salt_size: Option<usize>,
    },

    /// RSASSA-PSS over an already computed digest.
    PssRaw {
        /// Hash that produced the digest.
        hash: String,

        /// Salt length; the scheme default when `None`.
        salt_size: Option<usize>,
    },

    /// ISO 9796-2 digital signature scheme 2.
    Iso9796Ds2 {
        /// Message hash.
        hash: String,

        /// `true` if the trailer field is implicit.
        implicit_trailer: bool,

        /// Salt length; the scheme default when `None`.
        salt_size: Option<usize>,
    },

    /// ISO 9796-2 digital signature scheme 3 (deterministic, unsalted).
    Iso9796Ds3 {
        /// Message hash.
        hash: String,

        /// `true` if the trailer field is implicit.
        implicit_trailer: bool,
    },

    /// ANSI X9.31.
    X931 {
        /// Message hash.
        hash: String,
    },
}

impl PaddingScheme {
    /// Return the canonical padding identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Raw { .. } => "Raw",
            Self::Pkcs1v15 { .. } | Self::Pkcs1v15Raw { .. } => "PKCS1v15",
            Self::Pss { .. } => "PSS",
            Self::PssRaw { .. } => "PSS_Raw",
            Self::Iso9796Ds2 { .. } => "ISO_9796_DS2",
            Self::Iso9796Ds3 { .. } => "ISO_9796_DS3",
            Self::X931 { .. } => "X9.31",
        }
    }
}

impl TryFrom<&SignatureOptions> for PaddingScheme {
    type Error = SignatureOptionsError;

    fn try_from(options: &SignatureOptions) -> Result<Self, Self::Error> {
        // A missing hash and the "Raw" hash both mean the input is already a
        // digest (or is signed as is).
        let hash = options.hash().filter(|hash| *hash != "Raw");
        let padding = options.padding().unwrap_or("Raw");

        let prehash = || -> Result<Option<String>, SignatureOptionsError> {
            match (options.using_prehash(), options.prehash_fn()) {
                (false, _) => Ok(None),
                (true, Some(prehash_fn)) => Ok(Some(prehash_fn.to_owned())),
                (true, None) => Err(unavailable(options)),
            }
        };

        let scheme = match (padding, hash) {
            ("Raw", None) => Self::Raw {
                prehash: prehash()?,
            },
            ("PKCS1v15", None) => Self::Pkcs1v15Raw {
                prehash: prehash()?,
            },
            ("PKCS1v15", Some(hash)) => Self::Pkcs1v15 {
                hash: hash.to_owned(),
            },
            ("PSS", Some(hash)) => Self::Pss {
                hash: hash.to_owned(),
                salt_size: options.salt_size(),
            },
            ("PSS_Raw", Some(hash)) => Self::PssRaw {
                hash: hash.to_owned(),
                salt_size: options.salt_size(),
            },
            ("ISO_9796_DS2", Some(hash)) => Self::Iso9796Ds2 {
                hash: hash.to_owned(),
                implicit_trailer: !options.using_explicit_trailer_field(),
                salt_size: options.salt_size(),
            },
            ("ISO_9796_DS3", Some(hash)) => Self::Iso9796Ds3 {
                hash: hash.to_owned(),
                implicit_trailer: !options.using_explicit_trailer_field(),
            },
            ("X9.31", Some(hash)) => Self::X931 {
                hash: hash.to_owned(),
            },
            _ => return Err(unavailable(options)),
        };

        Ok(scheme)
    }
}

fn unavailable(options: &SignatureOptions) -> SignatureOptionsError {
    SignatureOptionsError::LookupFailure(format!(
        "invalid or unavailable signature padding scheme {}",
        options
            .padding_with_hash()
            .unwrap_or_else(|| "Raw".to_owned())
    ))
}
