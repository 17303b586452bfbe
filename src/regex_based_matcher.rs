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


use std::sync::Arc;

use log::error;

use crate::{
    interfaces::MatcherApi,
    phonemetadata::PhoneNumberDesc,
    regexp_cache::{InvalidRegexError, RegexCache},
    shortnumberinfo::MatchPolicy,
};

pub struct RegexBasedMatcher {
    cache: Arc<RegexCache>,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: Arc::new(RegexCache::with_capacity(128)) }
    }

    /// Creates a matcher sharing patterns that were already compiled elsewhere,
    /// usually by the metadata repository while validating its data.
    pub fn with_cache(cache: Arc<RegexCache>) -> Self {
        Self { cache }
    }

    fn match_number(
        &self, phone_number: &str,
        number_pattern: &str,
        policy: MatchPolicy,
    ) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(&anchored_pattern(number_pattern, policy))?;
        Ok(regexp.is_match(phone_number))
    }
}

/// Wraps a metadata pattern so that it has to match from the first digit, and
/// for [`MatchPolicy::Exact`] up to the last one as well.
///
/// Anchoring inside the pattern instead of checking match bounds afterwards
/// keeps alternations like `11|112` from stopping at the shorter branch.
pub(crate) fn anchored_pattern(number_pattern: &str, policy: MatchPolicy) -> String {
    match policy {
        MatchPolicy::Exact => fast_cat::concat_str!("^(?:", number_pattern, ")$"),
        MatchPolicy::ReachableByPrefix => fast_cat::concat_str!("^(?:", number_pattern, ")"),
    }
}

/// Checks the digit count against the possible lengths of a description. An
/// empty list means the lengths are not restricted at this level.
fn matches_possible_length(number: &str, possible_lengths: &[i32], policy: MatchPolicy) -> bool {
    if possible_lengths.is_empty() {
        return true;
    }
    let actual_length = number.len() as i32;
    match policy {
        MatchPolicy::Exact => possible_lengths.contains(&actual_length),
        MatchPolicy::ReachableByPrefix => possible_lengths
            .iter()
            .min()
            .is_some_and(|shortest| actual_length >= *shortest),
    }
}

impl Default for RegexBasedMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self, number: &str,
        number_desc: &PhoneNumberDesc,
        policy: MatchPolicy,
    ) -> bool {
        let national_number_pattern = number_desc.national_number_pattern();
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern.
        if national_number_pattern.is_empty() {
            return false;
        }
        if !matches_possible_length(number, &number_desc.possible_length, policy) {
            return false;
        }
        match self.match_number(number, national_number_pattern, policy) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex! {}: {}", national_number_pattern, err);
                false
            }
        }
    }
}
