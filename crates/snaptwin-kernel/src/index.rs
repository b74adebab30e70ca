//! Name lookup over a shell's nameplate.
//!
//! The index is built once per load and stores, for each distinct
//! `id_short`, the position of its first occurrence. Duplicate names are
//! kept in the nameplate but are unreachable through lookup.

use std::collections::BTreeMap;

use snaptwin_types::Property;

/// A nameplate query that matched nothing.
///
/// This is an ordinary outcome (a motor nameplate without "Torque"), not a
/// fault.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("property '{name}' not available for this asset")]
pub struct PropertyNotFound {
    pub name: String,
}

impl PropertyNotFound {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// First-occurrence positions of nameplate properties, keyed by `id_short`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyIndex {
    first_position: BTreeMap<String, usize>,
    len: usize,
}

impl PropertyIndex {
    /// Builds the index for a nameplate.
    pub fn build(nameplate: &[Property]) -> Self {
        let mut first_position = BTreeMap::new();
        for (position, prop) in nameplate.iter().enumerate() {
            first_position
                .entry(prop.id_short.clone())
                .or_insert(position);
        }

        // Postcondition: never more keys than properties
        debug_assert!(first_position.len() <= nameplate.len());

        Self {
            first_position,
            len: nameplate.len(),
        }
    }

    /// Returns the position of the first property named `id_short`.
    ///
    /// Matching is exact and case-sensitive.
    pub fn position(&self, id_short: &str) -> Option<usize> {
        self.first_position.get(id_short).copied()
    }

    /// Looks up the first property named `id_short` in `nameplate`.
    ///
    /// `nameplate` must be the slice this index was built from.
    pub fn lookup<'a>(&self, nameplate: &'a [Property], id_short: &str) -> Option<&'a Property> {
        debug_assert_eq!(
            nameplate.len(),
            self.len,
            "index built for a different nameplate"
        );

        let prop = nameplate.get(self.position(id_short)?)?;
        debug_assert_eq!(prop.id_short, id_short);
        Some(prop)
    }

    /// Returns every `id_short` in nameplate order, duplicates included.
    pub fn names(nameplate: &[Property]) -> Vec<String> {
        nameplate.iter().map(|prop| prop.id_short.clone()).collect()
    }

    /// Number of distinct names.
    pub fn distinct_len(&self) -> usize {
        self.first_position.len()
    }

    /// Returns true if any name occurs more than once in the nameplate.
    pub fn has_duplicates(&self) -> bool {
        self.first_position.len() < self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nameplate() -> Vec<Property> {
        vec![
            Property::new("Voltage", "400").with_unit("V"),
            Property::new("RPM", "1440").with_unit("1/min"),
            Property::new("Voltage", "230").with_unit("V"),
        ]
    }

    #[test]
    fn first_match_wins() {
        let nameplate = nameplate();
        let index = PropertyIndex::build(&nameplate);

        let prop = index.lookup(&nameplate, "Voltage").expect("present");
        assert_eq!(prop.value, "400");
        assert_eq!(index.position("Voltage"), Some(0));
        assert!(index.has_duplicates());
        assert_eq!(index.distinct_len(), 2);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let nameplate = nameplate();
        let index = PropertyIndex::build(&nameplate);

        assert!(index.lookup(&nameplate, "rpm").is_none());
        assert!(index.lookup(&nameplate, "RPM ").is_none());
        assert!(index.lookup(&nameplate, "RPM").is_some());
    }

    #[test]
    fn names_keep_order_and_duplicates() {
        assert_eq!(
            PropertyIndex::names(&nameplate()),
            vec!["Voltage", "RPM", "Voltage"]
        );
    }

    #[test]
    fn empty_nameplate_has_no_names() {
        let index = PropertyIndex::build(&[]);
        assert!(index.lookup(&[], "Voltage").is_none());
        assert!(PropertyIndex::names(&[]).is_empty());
        assert!(!index.has_duplicates());
    }

    #[test]
    fn not_found_message_is_distinct_from_load_failure() {
        let err = PropertyNotFound::new("Torque");
        assert_eq!(
            err.to_string(),
            "property 'Torque' not available for this asset"
        );
    }
}
