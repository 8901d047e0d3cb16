use std::iter::FromIterator;

use crate::common::HashMap;
use crate::common::ShortString;

/// The prefix of KEGG pathway identifiers.
const PATHWAY_PREFIX: &str = "path:";

/// The titles of every KEGG reference pathway.
///
/// The catalog is built once from the `list/pathway/ko` listing and then
/// only read from.
#[derive(Debug, Clone, Default)]
pub struct PathwayCatalog {
    titles: HashMap<ShortString, String>,
}

impl PathwayCatalog {
    /// Build a catalog from the text of a `list/pathway/ko` response.
    ///
    /// Lines without a title are skipped.
    pub fn from_response(text: &str) -> Self {
        text.lines()
            .filter_map(|line| {
                let mut fields = line.split('\t');
                let id = fields.next()?.trim();
                let title = fields.next()?.trim();
                if id.is_empty() || title.is_empty() {
                    None
                } else {
                    Some((id, title))
                }
            })
            .collect()
    }

    /// Get the title of the pathway `id`.
    ///
    /// Identifiers are matched with or without their `path:` prefix, as
    /// the listing may use either form.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.titles
            .get(id)
            .or_else(|| {
                if let Some(bare) = id.strip_prefix(PATHWAY_PREFIX) {
                    self.titles.get(bare)
                } else {
                    let prefixed = format!("{}{}", PATHWAY_PREFIX, id);
                    self.titles.get(prefixed.as_str())
                }
            })
            .map(String::as_str)
    }

    /// Get the number of pathways in the catalog.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Check whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl<K: Into<ShortString>, V: Into<String>> FromIterator<(K, V)> for PathwayCatalog {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let titles = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { titles }
    }
}
