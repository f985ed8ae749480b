use crate::models::EcpTranscoderConfig;
use crate::types::KeywordPair;

pub const DEFAULT_ECP_TRANSCODER_CONFIG: EcpTranscoderConfig = EcpTranscoderConfig {
    use_bold_chars: false,
    use_keyword_abbreviations: true,
};

/// The canonical separator every delimiter collapses into.
pub const ECP_SEPARATOR: char = '_';

/// Characters treated as token separators in original item names. A space is
/// a "plain" delimiter; every other member is a "special" delimiter whose
/// presence makes a name exceptional (requiring cache-backed reversal).
pub const DEFAULT_DELIMITERS: &[char] = &[
    ' ', '\'', '-', '/', '.', '#', '!', ':', '(', ')', ',',
];

/// Ordered `(long phrase, short form)` abbreviation pairs. Order matters:
/// later entries are applied to text already rewritten by earlier ones.
pub const DEFAULT_KEYWORD_PAIRS: &[KeywordPair] = &[
    ("Australium", "Aus"),
    ("Killstreak", "Ks"),
    ("Specialized", "Spec"),
    ("Professional", "Pro"),
    ("Collector's", "Collectors"),
];

/// The 62-character plain alphabet, in the exact order of
/// `BOLD_CHAR_SEQUENCE` (the two sequences form a positional bijection).
pub const PLAIN_CHAR_SEQUENCE: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Unicode mathematical sans-serif bold counterparts of
/// `PLAIN_CHAR_SEQUENCE`, one supplementary-plane code point per entry.
pub const BOLD_CHAR_SEQUENCE: &str =
    "𝗮𝗯𝗰𝗱𝗲𝗳𝗴𝗵𝗶𝗷𝗸𝗹𝗺𝗻𝗼𝗽𝗾𝗿𝘀𝘁𝘂𝘃𝘄𝘅𝘆𝘇𝗔𝗕𝗖𝗗𝗘𝗙𝗚𝗛𝗜𝗝𝗞𝗟𝗠𝗡𝗢𝗣𝗤𝗥𝗦𝗧𝗨𝗩𝗪𝗫𝗬𝗭𝟬𝟭𝟮𝟯𝟰𝟱𝟲𝟳𝟴𝟵";

/// Intent prefixes as they appear on the wire.
pub const BUY_PREFIX: &str = "buy_";
pub const SELL_PREFIX: &str = "sell_";
