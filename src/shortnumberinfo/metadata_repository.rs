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

use std::{collections::HashMap, sync::Arc};

use log::{trace, warn};
use protobuf::Message;

use crate::{
    i18n::RegionCode,
    interfaces::MetadataSource,
    phonemetadata::{PhoneMetadata, PhoneMetadataCollection},
    regex_based_matcher::anchored_pattern,
    regexp_cache::RegexCache,
};

use super::{MatchPolicy, errors::MetadataError, helper_functions::all_number_descs};

/// Immutable store of short number metadata, keyed by region.
///
/// Built once from a decoded metadata collection; every pattern is compiled
/// during construction so broken metadata is reported here and never at query
/// time. Share it between threads through an `Arc`.
pub struct MetadataRepository {
    /// A mapping from a region code to a PhoneMetadata for that region.
    region_to_metadata_map: HashMap<RegionCode, PhoneMetadata>,

    /// Compiled patterns of all descriptions, handed to the matcher.
    regex_cache: Arc<RegexCache>,
}

impl MetadataRepository {
    /// Decodes a serialized `PhoneMetadataCollection` and builds a repository
    /// from it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetadataError> {
        let collection = PhoneMetadataCollection::parse_from_bytes(bytes)?;
        Self::from_collection(collection)
    }

    pub fn from_collection(collection: PhoneMetadataCollection) -> Result<Self, MetadataError> {
        let regex_cache = Arc::new(RegexCache::with_capacity(collection.metadata.len() * 4));
        let mut region_to_metadata_map = HashMap::with_capacity(collection.metadata.len());

        for metadata in collection.metadata {
            let region = RegionCode::parse(metadata.id());
            if region.is_unknown() {
                warn!("Invalid region id '{}' in short number metadata", metadata.id());
                return Err(MetadataError::InvalidRegionId(metadata.id().to_owned()));
            }
            precompile_patterns(&regex_cache, &metadata)?;
            if region_to_metadata_map.insert(region, metadata).is_some() {
                return Err(MetadataError::DuplicateRegion { region: region.to_string() });
            }
        }
        trace!(
            "Loaded short number metadata for {} regions, {} patterns compiled",
            region_to_metadata_map.len(),
            regex_cache.len()
        );

        Ok(Self { region_to_metadata_map, regex_cache })
    }

    pub(crate) fn regex_cache(&self) -> Arc<RegexCache> {
        self.regex_cache.clone()
    }
}

/// Compiles every pattern of the region with the anchoring the matcher will
/// use. Only emergency numbers are ever matched by prefix.
fn precompile_patterns(cache: &RegexCache, metadata: &PhoneMetadata) -> Result<(), MetadataError> {
    for (name, desc) in all_number_descs(metadata) {
        let Some(desc) = desc else {
            continue;
        };
        let pattern = desc.national_number_pattern();
        if pattern.is_empty() {
            continue;
        }
        let policies: &[MatchPolicy] = if name == "emergency" {
            &[MatchPolicy::Exact, MatchPolicy::ReachableByPrefix]
        } else {
            &[MatchPolicy::Exact]
        };
        for policy in policies {
            cache
                .get_regex(&anchored_pattern(pattern, *policy))
                .map_err(|source| MetadataError::InvalidPattern {
                    region: metadata.id().to_owned(),
                    pattern: pattern.to_owned(),
                    source,
                })?;
        }
    }
    Ok(())
}

impl MetadataSource for MetadataRepository {
    fn metadata_for_region(&self, region: RegionCode) -> Option<&PhoneMetadata> {
        if region.is_unknown() {
            return None;
        }
        self.region_to_metadata_map.get(&region)
    }

    fn supported_regions(&self) -> Vec<RegionCode> {
        let mut regions: Vec<_> = self.region_to_metadata_map.keys().copied().collect();
        regions.sort();
        regions
    }
}
