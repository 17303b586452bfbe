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

use log::trace;

use super::{
    DialModifierPolicy, MatchPolicy, ShortNumberCost,
    helper_functions::{desc_has_data, example_number_of, get_number_desc_by_cost},
    metadata_repository::MetadataRepository,
    normalizer::normalize_or_reject,
};
use crate::{
    i18n::RegionCode,
    interfaces::{MatcherApi, MetadataSource},
    phonemetadata::{PhoneMetadata, PhoneNumberDesc},
    regex_based_matcher::RegexBasedMatcher,
};

/// Per-predicate treatment of leading dial modifiers such as `*911`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortNumberInfoOptions {
    /// Used by [`ShortNumberInfo::connects_to_emergency_number`].
    pub connects_dial_modifiers: DialModifierPolicy,
    /// Used by [`ShortNumberInfo::is_emergency_number`].
    pub exact_dial_modifiers: DialModifierPolicy,
}

impl Default for ShortNumberInfoOptions {
    fn default() -> Self {
        Self {
            connects_dial_modifiers: DialModifierPolicy::Strip,
            exact_dial_modifiers: DialModifierPolicy::Strip,
        }
    }
}

/// Methods for getting information about short phone numbers, such as short
/// codes and emergency numbers. Every query is answered from immutable
/// metadata and never fails: missing data gives `false`, an empty string or
/// [`ShortNumberCost::UnknownCost`].
pub struct ShortNumberInfo {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    metadata: Arc<dyn MetadataSource>,

    options: ShortNumberInfoOptions,
}

impl ShortNumberInfo {
    pub fn new(repository: Arc<MetadataRepository>) -> Self {
        Self::with_options(repository, ShortNumberInfoOptions::default())
    }

    pub fn with_options(repository: Arc<MetadataRepository>, options: ShortNumberInfoOptions) -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::with_cache(repository.regex_cache())),
            metadata: repository,
            options,
        }
    }

    /// Uses any metadata source. Patterns are compiled on first use.
    pub fn with_metadata_source(
        metadata: Arc<dyn MetadataSource>,
        options: ShortNumberInfoOptions,
    ) -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            metadata,
            options,
        }
    }

    /// Returns the regions short number metadata is available for.
    pub fn get_supported_regions(&self) -> Vec<RegionCode> {
        self.metadata.supported_regions()
    }

    fn get_metadata_for_region(&self, region: RegionCode) -> Option<&PhoneMetadata> {
        let metadata = self.metadata.metadata_for_region(region);
        if metadata.is_none() {
            trace!("No short number metadata for region {region}");
        }
        metadata
    }

    /// Gets a valid short number for the specified region, or an empty string
    /// if the region is unknown or has no example.
    pub fn get_example_short_number(&self, region: impl Into<RegionCode>) -> &str {
        let Some(metadata) = self.get_metadata_for_region(region.into()) else {
            return "";
        };
        example_number_of(metadata.short_code.as_ref())
    }

    /// Gets a valid short number of the given cost tier for the specified
    /// region. [`ShortNumberCost::UnknownCost`] always gives an empty string.
    pub fn get_example_short_number_for_cost(
        &self,
        region: impl Into<RegionCode>,
        cost: ShortNumberCost,
    ) -> &str {
        let Some(metadata) = self.get_metadata_for_region(region.into()) else {
            return "";
        };
        example_number_of(get_number_desc_by_cost(metadata, cost))
    }

    /// Returns whether dialing `number` in `region` reaches emergency services.
    ///
    /// In most regions the switch connects as soon as an emergency number has
    /// been dialed, so trailing digits do not matter: "9116666666" connects to
    /// 911 in the US. Regions whose metadata sets
    /// `emergency_numbers_must_be_exact` only connect on the exact number.
    ///
    /// Numbers in international form ("+911") never connect. Use this before
    /// placing a call that should not go to emergency services.
    pub fn connects_to_emergency_number(&self, number: &str, region: impl Into<RegionCode>) -> bool {
        self.matches_emergency_number_helper(number, region.into(), true)
    }

    /// Returns whether `number` is exactly an emergency number of `region`.
    /// Added or missing digits always give `false`.
    pub fn is_emergency_number(&self, number: &str, region: impl Into<RegionCode>) -> bool {
        self.matches_emergency_number_helper(number, region.into(), false)
    }

    fn matches_emergency_number_helper(
        &self,
        number: &str,
        region: RegionCode,
        allow_prefix_match: bool,
    ) -> bool {
        let dial_modifiers = if allow_prefix_match {
            self.options.connects_dial_modifiers
        } else {
            self.options.exact_dial_modifiers
        };
        let Some(normalized_number) = normalize_or_reject(number, dial_modifiers) else {
            return false;
        };
        let Some(metadata) = self.get_metadata_for_region(region) else {
            return false;
        };
        let allow_prefix_match_for_region =
            allow_prefix_match && !metadata.emergency_numbers_must_be_exact();
        let policy = if allow_prefix_match_for_region {
            MatchPolicy::ReachableByPrefix
        } else {
            MatchPolicy::Exact
        };
        self.matches_emergency_desc(&normalized_number, metadata, policy)
    }

    fn matches_emergency_desc(
        &self,
        normalized_number: &str,
        metadata: &PhoneMetadata,
        policy: MatchPolicy,
    ) -> bool {
        let Some(emergency) = metadata.emergency.as_ref().filter(|desc| desc_has_data(desc)) else {
            trace!("Region {} has no emergency numbers", metadata.id());
            return false;
        };
        self.matcher_api.match_national_number(normalized_number, emergency, policy)
    }

    /// Checks whether the length of the short number is possible for the
    /// region, without checking any pattern.
    pub fn is_possible_short_number_for_region(
        &self,
        short_number: &str,
        region: impl Into<RegionCode>,
    ) -> bool {
        let Some((short_number, metadata)) = self.prepare_short_number(short_number, region.into())
        else {
            return false;
        };
        metadata
            .general_desc
            .possible_length
            .contains(&(short_number.len() as i32))
    }

    /// Tests whether a short number matches a valid pattern in a region.
    pub fn is_valid_short_number_for_region(
        &self,
        short_number: &str,
        region: impl Into<RegionCode>,
    ) -> bool {
        self.matches_general_desc_and(short_number, region.into(), |metadata| {
            metadata.short_code.as_ref()
        })
    }

    /// Given a valid short number, determines whether it is carrier-specific:
    /// such numbers only reach a service when dialed from a subscriber of that
    /// carrier.
    pub fn is_carrier_specific_for_region(
        &self,
        short_number: &str,
        region: impl Into<RegionCode>,
    ) -> bool {
        self.matches_general_desc_and(short_number, region.into(), |metadata| {
            metadata.carrier_specific.as_ref()
        })
    }

    /// Given a valid short number, determines whether it is an SMS service,
    /// i.e. one that receives text messages rather than calls.
    pub fn is_sms_service_for_region(
        &self,
        short_number: &str,
        region: impl Into<RegionCode>,
    ) -> bool {
        self.matches_general_desc_and(short_number, region.into(), |metadata| {
            metadata.sms_services.as_ref()
        })
    }

    /// Gets the expected cost category of a short number dialed from a region.
    ///
    /// Tiers are tested from the most to the least expensive, so if patterns
    /// overlap the most expensive one wins. Emergency numbers without an
    /// explicit tier are toll-free.
    pub fn get_expected_cost_for_region(
        &self,
        short_number: &str,
        region: impl Into<RegionCode>,
    ) -> ShortNumberCost {
        let Some((short_number, metadata)) = self.prepare_short_number(short_number, region.into())
        else {
            return ShortNumberCost::UnknownCost;
        };
        // The possible lengths are not present for a particular sub-type if they
        // match the general description; for this reason, we check the possible
        // lengths against the general description first to allow an early exit
        // if possible.
        if !metadata
            .general_desc
            .possible_length
            .contains(&(short_number.len() as i32))
        {
            return ShortNumberCost::UnknownCost;
        }
        let tiers = [
            ShortNumberCost::PremiumRate,
            ShortNumberCost::StandardRate,
            ShortNumberCost::TollFree,
        ];
        for cost in tiers {
            if let Some(desc) = get_number_desc_by_cost(metadata, cost) {
                if self.matches_desc(&short_number, desc) {
                    trace!("Short number '{short_number}' is {cost:?} in {}", metadata.id());
                    return cost;
                }
            }
        }
        if self.matches_emergency_desc(&short_number, metadata, MatchPolicy::Exact) {
            return ShortNumberCost::TollFree;
        }
        trace!("Short number '{short_number}' has unknown cost in {}", metadata.id());
        ShortNumberCost::UnknownCost
    }

    /// Normalizes a short number for the non-emergency queries, which accept no
    /// dial modifiers, and resolves the region's metadata.
    fn prepare_short_number(
        &self,
        short_number: &str,
        region: RegionCode,
    ) -> Option<(String, &PhoneMetadata)> {
        let normalized_number = normalize_or_reject(short_number, DialModifierPolicy::Reject)?;
        let metadata = self.get_metadata_for_region(region)?;
        Some((normalized_number, metadata))
    }

    fn matches_general_desc_and<'a>(
        &'a self,
        short_number: &str,
        region: RegionCode,
        desc_for: impl FnOnce(&'a PhoneMetadata) -> Option<&'a PhoneNumberDesc>,
    ) -> bool {
        let Some((short_number, metadata)) = self.prepare_short_number(short_number, region) else {
            return false;
        };
        let Some(general_desc) = metadata.general_desc.as_ref() else {
            return false;
        };
        if !self.matches_desc(&short_number, general_desc) {
            return false;
        }
        desc_for(metadata).is_some_and(|desc| self.matches_desc(&short_number, desc))
    }

    fn matches_desc(&self, short_number: &str, desc: &PhoneNumberDesc) -> bool {
        self.matcher_api
            .match_national_number(short_number, desc, MatchPolicy::Exact)
    }
}
