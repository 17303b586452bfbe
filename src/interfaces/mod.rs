use crate::{
    i18n::RegionCode, phonemetadata::{PhoneMetadata, PhoneNumberDesc}, shortnumberinfo::MatchPolicy
};

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only decimal
    /// digits) matches the national number pattern and possible lengths defined in
    /// the given PhoneNumberDesc message, under the given policy.
    fn match_national_number(
        &self,
        number: &str,
        number_desc: &PhoneNumberDesc,
        policy: MatchPolicy,
    ) -> bool;
}

/// Read-only access to per-region short number metadata.
pub trait MetadataSource: Send + Sync {
    /// Returns the metadata of a region, `None` for unknown regions and regions
    /// without short number data.
    fn metadata_for_region(&self, region: RegionCode) -> Option<&PhoneMetadata>;

    /// Returns every region this source has metadata for.
    fn supported_regions(&self) -> Vec<RegionCode>;
}
