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

use strum::EnumIter;

/// Cost categories of short numbers.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortNumberCost {
    /// **Toll-free.**
    /// Free for the caller. Emergency numbers are implicitly toll-free.
    TollFree,
    /// **Standard rate.**
    /// Charged like a regular national call.
    StandardRate,
    /// **Premium rate.**
    /// Charged above the standard rate, e.g. voting lines and paid SMS services.
    PremiumRate,
    /// **Unknown cost.**
    /// As a result, no tier could be determined. As an argument, it stands for
    /// numbers outside of the three known tiers and has no example number.
    UnknownCost,
}

/// How a dialed digit sequence has to line up with a number pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPolicy {
    /// The whole sequence is a number of the pattern and its length is one of
    /// the possible lengths.
    Exact,
    /// Some prefix of the sequence is a number of the pattern. Trailing digits
    /// are extra key presses that do not stop the call from connecting.
    ReachableByPrefix,
}

/// What to do with dial modifiers (`*`, `#`) in front of the digits.
///
/// Some carriers use a leading `*` to request emergency routing. Metadata
/// patterns never contain these characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialModifierPolicy {
    /// Drop leading modifiers before matching.
    #[default]
    Strip,
    /// Treat input starting with a modifier as not a short number.
    Reject,
}
