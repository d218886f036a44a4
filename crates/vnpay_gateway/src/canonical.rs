//! Deterministic canonical representation of a gateway field set.
//!
//! The same canonicalization runs on the outbound signing path and the
//! inbound verification path. Any divergence between the two silently breaks
//! payment acceptance, so both paths share this module.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Percent-encode one key or value with form-encoding rules.
///
/// Form encoding renders a space as `+` (the gateway's documented
/// convention) and escapes a literal `+` as `%2B`, so the two are never
/// ambiguous.
pub fn form_encode(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// An ordered sequence of encoded `(key, value)` pairs ready for signing.
///
/// Pairs are held sorted by the encoded key in ascending byte order. Keys in
/// this protocol are plain ASCII identifiers, so sorting before or after
/// encoding yields the same order; encoding first keeps one rule for the
/// whole pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalFieldSet {
    entries: BTreeMap<String, String>,
}

impl CanonicalFieldSet {
    /// Build the canonical set from a flat field collection.
    ///
    /// Fields with empty values are omitted entirely; the gateway treats an
    /// empty field and an absent field identically and signs neither.
    /// Insertion order of the source collection has no effect on the result.
    pub fn from_fields<K, V, I>(fields: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = fields
            .into_iter()
            .filter(|(_, value)| !value.as_ref().is_empty())
            .map(|(key, value)| (form_encode(key.as_ref()), form_encode(value.as_ref())))
            .collect();
        Self { entries }
    }

    /// Render `key1=value1&key2=value2&...` with no leading `?` and no
    /// trailing separator.
    pub fn canonical_string(&self) -> String {
        let mut out = String::new();
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }

    /// Whether any signable field survived filtering.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
