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


//! Acceptance checks run by signature algorithms before they use a
//! [`SignatureOptions`].
//!
//! Every check is read-only: validating the same options twice gives the
//! same answer.

use log::debug;

use crate::signature_options::{Result, SignatureOptions, SignatureOptionsError};

/// Check options for a scheme with a fixed (or no) hash function and no
/// notion of padding or prehashing, as is typical for post-quantum
/// signature schemes.
///
/// Fails if the options name a hash other than `acceptable_hash` (or any
/// hash when `acceptable_hash` is `None`), specify a padding, or request
/// prehashing.
pub fn validate_for_hash_based_signature(
    options: &SignatureOptions,
    algo_name: &str,
    acceptable_hash: Option<&str>,
) -> Result<()> {
    if let Some(hash) = options.hash() {
        match acceptable_hash {
            None => {
                return reject(format!(
                    "this {algo_name} key does not support explicit hash function choice"
                ));
            }
            Some(acceptable) if acceptable != hash => {
                return reject(format!(
                    "this {algo_name} key can only be used with {acceptable}, not {hash}"
                ));
            }
            Some(_) => (),
        }
    }

    validate_without_padding(options, algo_name)?;
    validate_without_prehash(options, algo_name)
}

/// Fail if the options specify a padding scheme.
pub fn validate_without_padding(options: &SignatureOptions, algo_name: &str) -> Result<()> {
    if options.using_padding() {
        return reject(format!("{algo_name} does not support padding modes"));
    }
    Ok(())
}

/// Fail if the options request prehashing.
pub fn validate_without_prehash(options: &SignatureOptions, algo_name: &str) -> Result<()> {
    if options.using_prehash() {
        return reject(format!("{algo_name} does not support prehashing"));
    }
    Ok(())
}

/// Fail if the options request a DER-encoded signature.
pub fn validate_without_der_encoding(options: &SignatureOptions, algo_name: &str) -> Result<()> {
    if options.using_der_encoded_signature() {
        return reject(format!("{algo_name} does not support DER encoded signatures"));
    }
    Ok(())
}

/// Fail if the options specify context bytes.
pub fn validate_without_context(options: &SignatureOptions, algo_name: &str) -> Result<()> {
    if options.using_context() {
        return reject(format!("{algo_name} does not support a signature context"));
    }
    Ok(())
}

fn reject(reason: String) -> Result<()> {
    debug!("signature options rejected: {reason}");
    Err(SignatureOptionsError::InvalidArgument(reason))
}
