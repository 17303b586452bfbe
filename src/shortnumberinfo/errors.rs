// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Errors raised while building a metadata repository. Once a repository
/// exists, no query on it can fail.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Could not parse short number metadata: {0}")]
    Parse(#[from] protobuf::Error),

    #[error("Metadata entry has an invalid region id '{0}'")]
    InvalidRegionId(String),

    #[error("Metadata for region {region} is listed more than once")]
    DuplicateRegion { region: String },

    #[error("Invalid pattern '{pattern}' in metadata for region {region}: {source}")]
    InvalidPattern {
        region: String,
        pattern: String,
        #[source]
        source: InvalidRegexError,
    },
}

/// Reasons a raw string is not considered a short number dial attempt.
/// Internal only: queries turn all of them into a negative answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotAShortNumberError {
    #[error("Number is written in international form")]
    InternationalPrefix,
    #[error("Number starts with a dial modifier")]
    DialModifier,
    #[error("Unexpected character '{0}'")]
    InvalidCharacter(char),
    #[error("Number contains no digits")]
    NoDigits,
}
