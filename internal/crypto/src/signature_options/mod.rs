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


//! Options that control how digital signatures are produced or verified.

mod algorithm_family;
pub use algorithm_family::AlgorithmFamily;

mod error;
pub use error::SignatureOptionsError;

mod format;
pub use format::SignatureFormat;

pub mod legacy;
pub use legacy::{parse_legacy_options, LegacyOptionsFactory};

mod options;
pub use options::SignatureOptions;

mod padding_scheme;
pub use padding_scheme::PaddingScheme;

pub mod validators;

/// Result type for operations on [`SignatureOptions`].
pub type Result<T> = std::result::Result<T, SignatureOptionsError>;
