//! Bidirectional codec between human-readable catalog item names and
//! compact, delimiter-free "easy copy-paste" (ECP) trade tokens.
//!
//! Encoding collapses punctuation into `_` separators, optionally swaps
//! known long keywords for short forms, prefixes the counterparty's
//! buy/sell intent, and can render the result in a bold Unicode alphabet.
//! Decoding reverses the pipeline, consulting a mapping cache so that names
//! containing lossy delimiters round-trip byte-exactly.
//!
//! ```
//! use ecp_codec::{EcpTranscoder, Intent};
//!
//! let mut transcoder = EcpTranscoder::default();
//!
//! let token = transcoder.encode("Strange Shotgun", Intent::Buy).unwrap();
//! assert_eq!(token, "sell_Strange_Shotgun");
//!
//! let decoded = transcoder.decode(&token).unwrap();
//! assert_eq!(decoded.item_name, "Strange Shotgun");
//! assert_eq!(decoded.intent, Intent::Buy);
//! ```

mod constants;
pub mod models;
pub use constants::{
    DEFAULT_DELIMITERS, DEFAULT_ECP_TRANSCODER_CONFIG, DEFAULT_KEYWORD_PAIRS, ECP_SEPARATOR,
};
pub use models::{
    BoldTranscoder, CanonicalizedName, DecodedIntent, DelimiterCanonicalizer, EcpTranscoder,
    EcpTranscoderConfig, Error, Intent, KeywordTable, MappedItem, MappingCache,
};
pub mod types;
pub mod utils;
pub use types::{CandidateList, CanonicalName, EcpToken, ItemName, KeywordPair};
