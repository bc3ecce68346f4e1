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


//! Parser for structured algorithm descriptors of the form
//! `Name(arg0,arg1,...)`.
//!
//! Arguments may themselves be descriptors; nested arguments are kept
//! verbatim, so `EMSA4(SHA-256,MGF1(SHA-256))` has two arguments, the second
//! being `MGF1(SHA-256)`.

use nom::{
    bytes::complete::{is_not, tag},
    combinator::{all_consuming, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair},
    IResult,
};
use thiserror::Error;

/// A parsed `Name(arg0,arg1,...)` descriptor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StructuredDescriptor {
    algo_name: String,
    args: Vec<String>,
}

impl StructuredDescriptor {
    /// Parse a descriptor string.
    ///
    /// Returns [`DescriptorError::Malformed`] for empty input, unbalanced
    /// parentheses, empty arguments, or trailing text after the closing
    /// parenthesis.
    pub fn parse(descriptor: &str) -> Result<Self, DescriptorError> {
        let (_, (algo_name, args)) = all_consuming(pair(name, opt(arg_list)))(descriptor)
            .map_err(|_| DescriptorError::Malformed(descriptor.to_owned()))?;

        Ok(Self {
            algo_name: algo_name.to_owned(),
            args: args
                .unwrap_or_default()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        })
    }

    /// Return the leading algorithm or scheme name.
    pub fn algo_name(&self) -> &str {
        &self.algo_name
    }

    /// Return the number of positional arguments.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Return `true` if the argument count is within `lo..=hi`.
    pub fn arg_count_between(&self, lo: usize, hi: usize) -> bool {
        (lo..=hi).contains(&self.arg_count())
    }

    /// Return argument `i`, if present.
    pub fn arg(&self, i: usize) -> Option<&str> {
        self.args.get(i).map(String::as_str)
    }

    /// Return argument `i`, or `default` if absent.
    pub fn arg_or<'a>(&'a self, i: usize, default: &'a str) -> &'a str {
        self.arg(i).unwrap_or(default)
    }

    /// Return argument `i` parsed as a non-negative integer.
    pub fn arg_as_integer(&self, i: usize) -> Result<usize, DescriptorError> {
        let arg = self.arg(i).ok_or_else(|| DescriptorError::MissingArgument {
            descriptor: self.algo_name.clone(),
            index: i,
        })?;

        arg.parse::<usize>()
            .map_err(|_| DescriptorError::InvalidInteger(arg.to_owned()))
    }
}

fn name(i: &str) -> IResult<&str, &str> {
    is_not("(),")(i)
}

fn arg(i: &str) -> IResult<&str, &str> {
    recognize(pair(name, opt(arg_list)))(i)
}

fn arg_list(i: &str) -> IResult<&str, Vec<&str>> {
    delimited(tag("("), separated_list1(tag(","), arg), tag(")"))(i)
}

/// Describes errors that can occur while parsing a [`StructuredDescriptor`].
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum DescriptorError {
    /// The descriptor does not follow the `Name(arg0,arg1,...)` grammar.
    #[error("malformed algorithm descriptor '{0}'")]
    Malformed(String),

    /// A required positional argument is absent.
    #[error("descriptor '{descriptor}' has no argument at position {index}")]
    MissingArgument {
        /// Algorithm name of the descriptor.
        descriptor: String,

        /// Zero-based position that was requested.
        index: usize,
    },

    /// An argument that should be a non-negative integer is not one.
    #[error("'{0}' is not a valid non-negative integer")]
    InvalidInteger(String),
}
