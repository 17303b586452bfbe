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

pub const PLUS_CHARS: &'static str = "+\u{FF0B}";

/// Characters a carrier may expect in front of a short number, e.g. `*911`.
pub const DIAL_MODIFIER_CHARS: &'static str = "*#";

/// Returns true for characters that only visually separate digits.
///
/// These are the dash, white space, full stop, slash, bracket, parenthesis and
/// tilde characters of the phone number punctuation set, including the
/// full-width variants. Unlike full number parsing, the letter 'x' is not
/// accepted since short numbers carry no carrier information.
pub fn is_visual_separator(c: char) -> bool {
    matches!(
        c,
        '-' | ' ' | '(' | ')' | '[' | ']' | '.' | '/' | '~'
            | '\u{00A0}'
            | '\u{00AD}'
            | '\u{200B}'
            | '\u{2010}'..='\u{2015}'
            | '\u{2053}'
            | '\u{2060}'
            | '\u{2212}'
            | '\u{223C}'
            | '\u{3000}'
            | '\u{30FC}'
            | '\u{FF08}'
            | '\u{FF09}'
            | '\u{FF0D}'..='\u{FF0F}'
            | '\u{FF3B}'
            | '\u{FF3D}'
    )
}

pub fn is_plus_char(c: char) -> bool {
    PLUS_CHARS.contains(c)
}

pub fn is_dial_modifier(c: char) -> bool {
    DIAL_MODIFIER_CHARS.contains(c)
}
