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

use log::trace;

use super::{
    DialModifierPolicy,
    errors::NotAShortNumberError,
    helper_constants::{is_dial_modifier, is_plus_char, is_visual_separator},
};

/// Converts raw user input into the ASCII digit string that is matched against
/// short number metadata.
///
/// Decimal digits of any script are converted to ASCII. Visual separators are
/// dropped. Leading dial modifiers are handled according to
/// `dial_modifiers`. A plus sign in front of the digits means the number is
/// dialed internationally, which a short number never is.
pub(crate) fn normalize_short_number(
    number: &str,
    dial_modifiers: DialModifierPolicy,
) -> Result<String, NotAShortNumberError> {
    let decimals = dec_from_char::normalize_decimals(number.trim());
    let mut rest = decimals.trim_start();

    if rest.starts_with(is_plus_char) {
        return Err(NotAShortNumberError::InternationalPrefix);
    }
    if rest.starts_with(is_dial_modifier) {
        if dial_modifiers == DialModifierPolicy::Reject {
            return Err(NotAShortNumberError::DialModifier);
        }
        rest = rest.trim_start_matches(is_dial_modifier).trim_start();
        // "*+911" is still an international number
        if rest.starts_with(is_plus_char) {
            return Err(NotAShortNumberError::InternationalPrefix);
        }
    }

    let mut digits = String::with_capacity(rest.len());
    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !is_visual_separator(c) {
            return Err(NotAShortNumberError::InvalidCharacter(c));
        }
    }
    if digits.is_empty() {
        return Err(NotAShortNumberError::NoDigits);
    }
    Ok(digits)
}

/// Same as [`normalize_short_number`], logging the rejection reason and
/// returning `None` for input that can not be a short number.
pub(crate) fn normalize_or_reject(
    number: &str,
    dial_modifiers: DialModifierPolicy,
) -> Option<String> {
    normalize_short_number(number, dial_modifiers)
        .inspect_err(|err| trace!("'{number}' is not a short number: {err}"))
        .ok()
}
