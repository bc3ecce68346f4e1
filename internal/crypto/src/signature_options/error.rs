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


use thiserror::Error;

use crate::descriptor::DescriptorError;

/// Describes errors that can occur while building, parsing, or validating
/// [`SignatureOptions`].
///
/// [`SignatureOptions`]: crate::signature_options::SignatureOptions
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum SignatureOptionsError {
    /// A malformed or semantically illegal input value was provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An option was set twice, or a required option was never set.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A recognized padding scheme was given parameters that do not match
    /// any shape it accepts.
    #[error("lookup failure: {0}")]
    LookupFailure(String),
}

impl From<DescriptorError> for SignatureOptionsError {
    fn from(err: DescriptorError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
