// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents an original, human-authored item name as an owned `String`.
pub type ItemName = String;

/// Represents a fully encoded ECP token (intent prefix + canonical name,
/// optionally bold-styled) as an owned `String`.
pub type EcpToken = String;

/// Represents a delimiter-canonicalized item name (separator-joined, no
/// special delimiters remaining) as an owned `String`.
pub type CanonicalName = String;

/// An ordered list of canonical encodings derived from one item name. The
/// first entry is always the plain canonicalization; later entries are
/// keyword-abbreviated variants.
pub type CandidateList = Vec<CanonicalName>;

/// A `(long phrase, short form)` keyword abbreviation pair.
pub type KeywordPair = (&'static str, &'static str);
