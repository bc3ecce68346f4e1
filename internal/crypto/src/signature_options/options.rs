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

use serde::Serialize;

use crate::signature_options::{Result, SignatureOptionsError};

/// Options that control how a digital signature is produced or verified.
///
/// A `SignatureOptions` value is assembled with the `with_*` methods. Each of
/// them consumes the current value and returns a new one in which exactly one
/// option has been set. An option that has already been set can never be set
/// again; attempting to do so yields [`SignatureOptionsError::InvalidState`].
///
/// The record knows nothing about which algorithm it will be used with.
/// Algorithms reject options they cannot honor using the checks in
/// [`validators`](crate::signature_options::validators).
///
/// ## Example
///
/// ```
/// # use pk_signature_options::signature_options::SignatureOptions;
/// let options = SignatureOptions::new()
///     .with_padding("PSS")?
///     .with_hash("SHA-256")?
///     .with_salt_size(32)?;
///
/// assert_eq!(options.padding(), Some("PSS"));
/// assert_eq!(options.hash_function_name()?, "SHA-256");
/// assert_eq!(options.salt_size(), Some(32));
/// # Ok::<(), pk_signature_options::signature_options::SignatureOptionsError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SignatureOptions {
    hash: Option<String>,
    padding: Option<String>,
    prehash: bool,
    prehash_fn: Option<String>,
    context: Option<Vec<u8>>,
    provider: Option<String>,
    salt_size: Option<usize>,
    deterministic: bool,
    der_encoded: bool,
    explicit_trailer_field: bool,
}

/// Provider name that means "no preference".
const BASE_PROVIDER: &str = "base";

impl SignatureOptions {
    /// Return a `SignatureOptions` with no options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the hash function used for the message or for prehashing.
    pub fn with_hash(mut self, hash: &str) -> Result<Self> {
        ensure_unset(&self.hash, "hash")?;
        ensure_non_empty(hash, "hash")?;
        self.hash = Some(hash.to_owned());
        Ok(self)
    }

    /// Specify a padding scheme.
    ///
    /// This is mostly used with RSA. Schemes that have no notion of padding
    /// reject options that carry one.
    pub fn with_padding(mut self, padding: &str) -> Result<Self> {
        ensure_unset(&self.padding, "padding")?;
        ensure_non_empty(padding, "padding")?;
        self.padding = Some(padding.to_owned());
        Ok(self)
    }

    /// Request that the message be hashed before it is signed.
    ///
    /// If `prehash_fn` is `None`, an algorithm-specific default hash function
    /// is used for prehashing.
    pub fn with_prehash(mut self, prehash_fn: Option<&str>) -> Result<Self> {
        if self.prehash {
            return Err(SignatureOptionsError::InvalidState(
                "cannot specify prehash twice".to_owned(),
            ));
        }
        self.prehash = true;
        self.prehash_fn = prehash_fn.map(str::to_owned);
        Ok(self)
    }

    /// Specify context bytes for the signature.
    ///
    /// For SM2 this is the user identifier; for EdDSA it is the signature
    /// context. Strings and byte slices are treated identically.
    pub fn with_context(mut self, context: impl AsRef<[u8]>) -> Result<Self> {
        ensure_unset(&self.context, "context")?;
        self.context = Some(context.as_ref().to_vec());
        Ok(self)
    }

    /// Specify a provider that should be used.
    ///
    /// An empty name leaves the options unchanged. The name `"base"` means
    /// "no preference" and leaves the provider unset.
    pub fn with_provider(mut self, provider: &str) -> Result<Self> {
        if provider.is_empty() {
            return Ok(self);
        }
        ensure_unset(&self.provider, "provider")?;
        if provider != BASE_PROVIDER {
            self.provider = Some(provider.to_owned());
        }
        Ok(self)
    }

    /// Specify the salt length for salted padding schemes.
    pub fn with_salt_size(mut self, salt_size: usize) -> Result<Self> {
        ensure_unset(&self.salt_size, "salt size")?;
        self.salt_size = Some(salt_size);
        Ok(self)
    }

    /// Request a deterministic signature.
    ///
    /// Has no effect for schemes that are always deterministic or always
    /// randomized. Ignored for verification.
    pub fn with_deterministic_signature(mut self) -> Self {
        self.deterministic = true;
        self
    }

    /// Produce or expect a DER-encoded signature.
    pub fn with_der_encoded_signature(mut self) -> Self {
        self.der_encoded = true;
        self
    }

    /// Use an explicit trailer field (ISO 9796-2).
    pub fn with_explicit_trailer_field(mut self) -> Self {
        self.explicit_trailer_field = true;
        self
    }

    /// Return the hash function, if one was specified.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Return `true` if a hash function was specified.
    pub fn using_hash(&self) -> bool {
        self.hash.is_some()
    }

    /// Return the hash function, or an error if none was specified.
    ///
    /// Intended for schemes that have no sensible default hash.
    pub fn hash_function_name(&self) -> Result<&str> {
        self.hash().ok_or_else(|| {
            SignatureOptionsError::InvalidState(
                "this signature scheme requires specifying a hash function".to_owned(),
            )
        })
    }

    /// Return the padding scheme, if one was specified.
    pub fn padding(&self) -> Option<&str> {
        self.padding.as_deref()
    }

    /// Return `true` if a padding scheme was specified.
    pub fn using_padding(&self) -> bool {
        self.padding.is_some()
    }

    /// Return `true` if prehashing was requested.
    pub fn using_prehash(&self) -> bool {
        self.prehash
    }

    /// Return the explicit prehash function, if one was specified.
    pub fn prehash_fn(&self) -> Option<&str> {
        self.prehash_fn.as_deref()
    }

    /// Return the context bytes, if specified.
    pub fn context(&self) -> Option<&[u8]> {
        self.context.as_deref()
    }

    /// Return `true` if context bytes were specified.
    pub fn using_context(&self) -> bool {
        self.context.is_some()
    }

    /// Return the provider, if one other than the default was specified.
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Return `true` if a provider other than the default was specified.
    pub fn using_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Return the salt size, if specified.
    pub fn salt_size(&self) -> Option<usize> {
        self.salt_size
    }

    /// Return `true` if a salt size was specified.
    pub fn using_salt_size(&self) -> bool {
        self.salt_size.is_some()
    }

    /// Return `true` if a deterministic signature was requested.
    pub fn using_deterministic_signature(&self) -> bool {
        self.deterministic
    }

    /// Return `true` if a DER-encoded signature was requested.
    pub fn using_der_encoded_signature(&self) -> bool {
        self.der_encoded
    }

    /// Return `true` if an explicit trailer field was requested.
    pub fn using_explicit_trailer_field(&self) -> bool {
        self.explicit_trailer_field
    }

    /// Return the padding formatted together with its hash, as
    /// `"padding(hash)"`, or just `"padding"` when no hash was specified.
    ///
    /// Returns `None` if no padding was specified.
    pub fn padding_with_hash(&self) -> Option<String> {
        let padding = self.padding()?;
        Some(match self.hash() {
            Some(hash) => format!("{padding}({hash})"),
            None => padding.to_owned(),
        })
    }
}

impl fmt::Display for SignatureOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_unset(value: Option<&str>) -> &str {
            value.unwrap_or("<unset>")
        }

        writeln!(f, "hash: {}", or_unset(self.hash()))?;
        writeln!(f, "padding: {}", or_unset(self.padding()))?;
        writeln!(f, "prehash: {}", self.prehash)?;
        writeln!(f, "prehash_fn: {}", or_unset(self.prehash_fn()))?;
        match self.context() {
            Some(context) => writeln!(f, "context: {}", hex::encode(context))?,
            None => writeln!(f, "context: <unset>")?,
        }
        writeln!(f, "provider: {}", or_unset(self.provider()))?;
        match self.salt_size {
            Some(salt_size) => writeln!(f, "salt_size: {salt_size}")?,
            None => writeln!(f, "salt_size: <unset>")?,
        }
        writeln!(f, "deterministic: {}", self.deterministic)?;
        writeln!(f, "der_encoded: {}", self.der_encoded)?;
        writeln!(f, "explicit_trailer_field: {}", self.explicit_trailer_field)
    }
}

fn ensure_unset<T>(slot: &Option<T>, option_name: &str) -> Result<()> {
    if slot.is_some() {
        return Err(SignatureOptionsError::InvalidState(format!(
            "cannot specify {option_name} twice"
        )));
    }
    Ok(())
}

fn ensure_non_empty(value: &str, option_name: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SignatureOptionsError::InvalidArgument(format!(
            "{option_name} cannot be empty"
        )));
    }
    Ok(())
}
