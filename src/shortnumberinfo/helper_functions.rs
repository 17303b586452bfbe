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

use crate::phonemetadata::{PhoneMetadata, PhoneNumberDesc};

use super::ShortNumberCost;

/// Returns the description inside the metadata for the given cost tier.
/// `UnknownCost` has no description of its own.
pub(super) fn get_number_desc_by_cost(
    metadata: &PhoneMetadata,
    cost: ShortNumberCost,
) -> Option<&PhoneNumberDesc> {
    match cost {
        ShortNumberCost::TollFree => metadata.toll_free.as_ref(),
        ShortNumberCost::StandardRate => metadata.standard_rate.as_ref(),
        ShortNumberCost::PremiumRate => metadata.premium_rate.as_ref(),
        ShortNumberCost::UnknownCost => None,
    }
}

/// Returns every description of a region together with its name, for
/// validation and logging.
pub(super) fn all_number_descs(metadata: &PhoneMetadata) -> [(&'static str, Option<&PhoneNumberDesc>); 8] {
    [
        ("general_desc", metadata.general_desc.as_ref()),
        ("toll_free", metadata.toll_free.as_ref()),
        ("standard_rate", metadata.standard_rate.as_ref()),
        ("premium_rate", metadata.premium_rate.as_ref()),
        ("emergency", metadata.emergency.as_ref()),
        ("short_code", metadata.short_code.as_ref()),
        ("carrier_specific", metadata.carrier_specific.as_ref()),
        ("sms_services", metadata.sms_services.as_ref()),
    ]
}

/// Returns `true` if there is any data set for a particular PhoneNumberDesc.
pub(super) fn desc_has_data(desc: &PhoneNumberDesc) -> bool {
    desc.has_example_number()
        || !desc.possible_length.is_empty()
        || desc.has_national_number_pattern()
}

/// Returns the example number of a description, or an empty string if the
/// description or its example is missing.
pub(super) fn example_number_of(desc: Option<&PhoneNumberDesc>) -> &str {
    desc.filter(|desc| desc.has_example_number())
        .map(|desc| desc.example_number())
        .unwrap_or("")
}
