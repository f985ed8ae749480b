pub mod bold_transcoder;
pub use bold_transcoder::BoldTranscoder;

pub mod delimiter_canonicalizer;
pub use delimiter_canonicalizer::{CanonicalizedName, DelimiterCanonicalizer};

pub mod ecp_transcoder;
pub use ecp_transcoder::{DecodedIntent, EcpTranscoder, EcpTranscoderConfig};

pub mod error;
pub use error::Error;

pub mod intent;
pub use intent::Intent;

pub mod keyword_table;
pub use keyword_table::KeywordTable;

pub mod mapped_item;
pub use mapped_item::MappedItem;

pub mod mapping_cache;
pub use mapping_cache::MappingCache;
