//! Common types shared by every stage of the pipeline.

/// The string type used for KEGG and UniProt tokens.
#[cfg(feature = "smartstring")]
pub type ShortString = smartstring::alias::String;

/// The string type used for KEGG and UniProt tokens.
#[cfg(not(feature = "smartstring"))]
pub type ShortString = std::string::String;

/// The hash map type used for the lookup tables.
pub type HashMap<K, V> = fnv::FnvHashMap<K, V>;
