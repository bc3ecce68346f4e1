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


//! The RSA legacy grammar.
//!
//! An RSA descriptor names a padding scheme and its parameters, for example
//! `EMSA-PSS(SHA-256,MGF1,32)`. Padding names are first normalized through
//! an alias table; each canonical scheme then accepts its own argument
//! shapes.

use log::{debug, warn};

use crate::{
    descriptor::StructuredDescriptor,
    settings::LegacySettings,
    signature_options::{Result, SignatureFormat, SignatureOptions, SignatureOptionsError},
};

/// Historical padding names and the canonical identifier each maps to.
static PADDING_ALIASES: &[(&str, &str)] = &[
    ("EMSA_PKCS1", "PKCS1v15"),
    ("EMSA-PKCS1-v1_5", "PKCS1v15"),
    ("EMSA3", "PKCS1v15"),
    ("PSSR_Raw", "PSS_Raw"),
    ("PSSR", "PSS"),
    ("EMSA-PSS", "PSS"),
    ("PSS-MGF1", "PSS"),
    ("EMSA4", "PSS"),
    ("EMSA_X931", "X9.31"),
    ("EMSA2", "X9.31"),
    ("X9.31", "X9.31"),
];

/// Return the canonical padding identifier for `name`.
///
/// Names that are not aliases are returned unchanged.
pub fn canonical_padding_name(name: &str) -> &str {
    PADDING_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

pub(super) fn parse_rsa(
    settings: &LegacySettings,
    params: &str,
    _format: SignatureFormat,
) -> Result<SignatureOptions> {
    let req = StructuredDescriptor::parse(params)?;

    let padding = canonical_padding_name(req.algo_name());
    if padding != req.algo_name() {
        debug!("RSA padding '{}' treated as '{padding}'", req.algo_name());
    }

    let options = SignatureOptions::new().with_padding(padding)?;

    match padding {
        "Raw" => match req.arg_count() {
            0 => Ok(options),
            1 => options.with_prehash(req.arg(0)),
            _ => Err(SignatureOptionsError::InvalidArgument(format!(
                "raw RSA padding accepts at most one argument, got '{params}'"
            ))),
        },

        "PKCS1v15" => {
            if req.arg_count() == 1 {
                options.with_hash(required_arg(&req, 0)?)
            } else if req.arg_count() == 2 && req.arg(0) == Some("Raw") {
                options
                    .with_hash(required_arg(&req, 0)?)?
                    .with_prehash(req.arg(1))
            } else {
                Err(lookup_failure(params))
            }
        }

        "PSS" | "PSS_Raw" => {
            if req.arg_count_between(1, 3) && req.arg_or(1, "MGF1") == "MGF1" {
                let options = options.with_hash(required_arg(&req, 0)?)?;
                if req.arg_count() == 3 {
                    options.with_salt_size(req.arg_as_integer(2)?)
                } else {
                    Ok(options)
                }
            } else {
                Err(lookup_failure(params))
            }
        }

        "ISO_9796_DS2" => {
            if req.arg_count_between(1, 3) {
                let options = options.with_hash(required_arg(&req, 0)?)?;
                let options = with_iso_9796_trailer(options, &req);
                if req.arg_count() == 3 {
                    options.with_salt_size(req.arg_as_integer(2)?)
                } else {
                    Ok(options)
                }
            } else {
                Err(lookup_failure(params))
            }
        }

        // DS3 is deterministic and has no salt.
        "ISO_9796_DS3" => {
            if req.arg_count_between(1, 2) {
                Ok(with_iso_9796_trailer(
                    options.with_hash(required_arg(&req, 0)?)?,
                    &req,
                ))
            } else {
                Err(lookup_failure(params))
            }
        }

        "X9.31" => {
            if req.arg_count() == 1 {
                options.with_hash(required_arg(&req, 0)?)
            } else {
                Err(lookup_failure(params))
            }
        }

        _ if settings.allow_unknown_rsa_padding => {
            warn!("unrecognized RSA padding '{padding}' passed through unchanged");
            Ok(options)
        }

        _ => Err(lookup_failure(params)),
    }
}

// The trailer is explicit unless the second argument is "imp".
fn with_iso_9796_trailer(
    options: SignatureOptions,
    req: &StructuredDescriptor,
) -> SignatureOptions {
    if req.arg_or(1, "exp") == "imp" {
        options
    } else {
        options.with_explicit_trailer_field()
    }
}

fn required_arg(req: &StructuredDescriptor, i: usize) -> Result<&str> {
    req.arg(i).ok_or_else(|| {
        SignatureOptionsError::InvalidArgument(format!(
            "'{}' has no argument at position {i}",
            req.algo_name()
        ))
    })
}

fn lookup_failure(params: &str) -> SignatureOptionsError {
    SignatureOptionsError::LookupFailure(format!(
        "invalid or unavailable signature padding scheme '{params}'"
    ))
}
