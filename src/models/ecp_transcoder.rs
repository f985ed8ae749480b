use crate::constants::{
    DEFAULT_DELIMITERS, DEFAULT_ECP_TRANSCODER_CONFIG, DEFAULT_KEYWORD_PAIRS, ECP_SEPARATOR,
};
use crate::models::{
    BoldTranscoder, DelimiterCanonicalizer, Error, Intent, KeywordTable, MappedItem, MappingCache,
};
use crate::types::{CandidateList, EcpToken, ItemName, KeywordPair};
use log::{debug, info};

#[derive(Debug, Clone, Copy)]
pub struct EcpTranscoderConfig {
    /// Render encoded tokens with the bold glyph alphabet.
    pub use_bold_chars: bool,

    /// Prefer the shortest keyword-abbreviated candidate when encoding and
    /// expand abbreviations back on fallback decoding.
    pub use_keyword_abbreviations: bool,
}

/// The decoded form of an ECP token: the original (or best-effort
/// reconstructed) item name and the caller-side trade intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedIntent {
    pub item_name: ItemName,
    pub intent: Intent,
}

/// Orchestrates the canonicalizer, keyword table, bold transcoder, and
/// mapping cache into `encode`/`decode`. Owns the cache outright; callers
/// that want persistence load and save the record list around it via
/// `preload_mapped_items`/`mapped_items`.
pub struct EcpTranscoder {
    config: EcpTranscoderConfig,
    canonicalizer: DelimiterCanonicalizer,
    keyword_table: KeywordTable,
    bold_transcoder: BoldTranscoder,
    cache: MappingCache,
}

impl EcpTranscoder {
    /// Creates a transcoder with the default delimiter set and keyword
    /// pairs.
    pub fn new(config: EcpTranscoderConfig) -> Self {
        Self::with_tables(config, DEFAULT_DELIMITERS, DEFAULT_KEYWORD_PAIRS)
    }

    /// Creates a transcoder with a custom delimiter set and keyword table.
    /// Both are fixed for the transcoder's lifetime.
    pub fn with_tables(
        config: EcpTranscoderConfig,
        delimiters: &[char],
        keyword_pairs: &[KeywordPair],
    ) -> Self {
        Self {
            config,
            canonicalizer: DelimiterCanonicalizer::new(delimiters),
            keyword_table: KeywordTable::new(keyword_pairs),
            bold_transcoder: BoldTranscoder::new(),
            cache: MappingCache::new(),
        }
    }

    /// Encodes an item name into an ECP token carrying the counterparty's
    /// intent prefix.
    ///
    /// Exceptional names (those containing a non-space delimiter) have their
    /// full candidate set recorded in the mapping cache so `decode` can
    /// reproduce the original byte-exactly. Encoding the same name again
    /// reuses the cached candidates and yields identical output.
    pub fn encode(&mut self, item_name: &str, intent: Intent) -> Result<EcpToken, Error> {
        if item_name.is_empty() {
            return Err(Error::EmptyInput(
                "Cannot encode an empty item name".to_string(),
            ));
        }

        let candidates = self.cached_or_derived_candidates(item_name)?;

        let chosen = if self.config.use_keyword_abbreviations {
            candidates
                .iter()
                .min_by_key(|candidate| candidate.chars().count())
        } else {
            candidates.first()
        };

        // `cached_or_derived_candidates` never yields an empty list.
        let chosen = chosen.ok_or_else(|| {
            Error::UnmappedToken(format!("No encoding candidates for {:?}", item_name))
        })?;

        let token = intent.inverted().wrap(chosen);

        if self.config.use_bold_chars {
            Ok(self.bold_transcoder.to_styled(&token))
        } else {
            Ok(token)
        }
    }

    /// Decodes an ECP token back into the original item name and the
    /// caller-side intent.
    ///
    /// Bold styling is normalized away first. Tokens without a recognizable
    /// `buy_`/`sell_` prefix fail with `UnmappedToken`. A cache hit returns
    /// the stored original name; a miss falls back to separator→space
    /// substitution plus keyword expansion when enabled.
    pub fn decode(&self, token: &str) -> Result<DecodedIntent, Error> {
        if token.is_empty() {
            return Err(Error::EmptyInput(
                "Cannot decode an empty ECP token".to_string(),
            ));
        }

        let plain = self.bold_transcoder.to_plain(token);

        let (prefix_intent, remainder) = Intent::unwrap(&plain).ok_or_else(|| {
            Error::UnmappedToken(format!("No buy/sell prefix found in {:?}", plain))
        })?;

        if remainder.is_empty() {
            return Err(Error::UnmappedToken(format!(
                "Nothing follows the intent prefix in {:?}",
                plain
            )));
        }

        let item_name = match self.cache.find(remainder) {
            Some(entry) => entry.item_name.clone(),
            None => {
                debug!("No cache entry for {:?}; using fallback decoding", remainder);
                let spaced = remainder.replace(ECP_SEPARATOR, " ");
                if self.config.use_keyword_abbreviations {
                    self.keyword_table.expand(&spaced)
                } else {
                    spaced
                }
            }
        };

        // The prefix carries the counterparty's action; mirror it back to
        // the caller's perspective.
        Ok(DecodedIntent {
            item_name,
            intent: prefix_intent.inverted(),
        })
    }

    /// The cache records accumulated so far, for persistence by the caller.
    pub fn mapped_items(&self) -> &[MappedItem] {
        self.cache.entries()
    }

    /// Seeds the cache wholesale, e.g. from a persisted map file.
    pub fn preload_mapped_items(&mut self, items: Vec<MappedItem>) {
        self.cache.restore(items);
    }

    /// Returns the candidate encodings for `item_name`, reusing a cached
    /// entry when one exists and deriving (and possibly recording) them
    /// otherwise.
    fn cached_or_derived_candidates(&mut self, item_name: &str) -> Result<CandidateList, Error> {
        if let Some(entry) = self.cache.find(item_name) {
            if !entry.candidates.is_empty() {
                return Ok(entry.candidates.clone());
            }
        }

        let canonicalized = self.canonicalizer.canonicalize(item_name)?;

        let mut candidates: CandidateList = vec![canonicalized.text.clone()];

        // Keyword shortening applied before and after canonicalization can
        // produce distinct tokens; keep every distinct derivation in
        // computation order.
        let shorten_then_canonicalize = self
            .canonicalizer
            .canonicalize(&self.keyword_table.shorten(item_name))?
            .text;
        let canonicalize_then_shorten = self.keyword_table.shorten(&canonicalized.text);

        for variant in [shorten_then_canonicalize, canonicalize_then_shorten] {
            if !candidates.contains(&variant) {
                candidates.push(variant);
            }
        }

        if canonicalized.is_exceptional {
            info!(
                "Recording exceptional item name {:?} with {} candidate(s)",
                item_name,
                candidates.len()
            );
            self.cache.record(item_name, candidates.clone());
        }

        Ok(candidates)
    }
}

impl Default for EcpTranscoder {
    fn default() -> Self {
        Self::new(DEFAULT_ECP_TRANSCODER_CONFIG)
    }
}
