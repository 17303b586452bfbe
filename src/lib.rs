mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod shortnumberinfo;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;


pub use i18n::RegionCode;
pub use interfaces::MetadataSource;
pub use proto_gen::phonemetadata;
pub use shortnumberinfo::{
    DialModifierPolicy, MatchPolicy, MetadataRepository, ShortNumberCost, ShortNumberInfo,
    ShortNumberInfoOptions, errors,
};
