//! Ordered, slug-indexed collection of stream fields.

use std::collections::{BTreeSet, HashMap};

use strata_postgres::types::constants::streams;

use crate::field::Field;
use crate::types::{EntryContext, FieldTypeCollection, FieldTypeRegistry};

/// A fixed, ordered set of [`Field`]s with O(1) slug lookup.
///
/// The collection and its slug index are built in one pass at
/// construction and never mutated afterwards; every derived view is a
/// pure function of the ordered sequence. Fields without a slug are kept
/// in order but get no index entry; when two fields share a slug the
/// later one wins the index slot.
#[derive(Debug, Clone, Default)]
pub struct FieldCollection {
    fields: Vec<Field>,
    by_slug: HashMap<String, usize>,
}

impl FieldCollection {
    /// Builds a collection and its slug index from an ordered sequence.
    pub fn new(fields: Vec<Field>) -> Self {
        let mut by_slug = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            if field.has_slug() {
                by_slug.insert(field.slug.clone(), index);
            }
        }

        Self { fields, by_slug }
    }

    /// Returns the number of fields, indexed or not.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the collection holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates the fields in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Finds a field by slug.
    ///
    /// Absence is not an error: unknown and empty slugs return `None`.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Field> {
        self.by_slug.get(slug).map(|&index| &self.fields[index])
    }

    /// Returns the field slugs in collection order.
    ///
    /// Unindexed (slug-less) fields are skipped; duplicate slugs appear
    /// as often as they occur in the sequence.
    pub fn field_slugs(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.has_slug())
            .map(|field| field.slug.as_str())
            .collect()
    }

    /// Returns the standard stream columns plus all field slugs, minus
    /// the given exclusions.
    ///
    /// Set semantics: no ordering guarantee, duplicates collapse.
    pub fn field_slugs_exclude(&self, columns: &[&str]) -> BTreeSet<String> {
        let mut all: BTreeSet<String> = streams::STANDARD_COLUMNS
            .iter()
            .map(|column| (*column).to_owned())
            .collect();
        all.extend(self.field_slugs().into_iter().map(str::to_owned));

        for column in columns {
            all.remove(*column);
        }

        all
    }

    /// Returns a slug-to-field mapping derived from the live ordered
    /// sequence, not the cached index; a snapshot at call time.
    pub fn indexed_by_slug(&self) -> HashMap<&str, &Field> {
        let mut indexed = HashMap::with_capacity(self.fields.len());
        for field in &self.fields {
            if field.has_slug() {
                indexed.insert(field.slug.as_str(), field);
            }
        }
        indexed
    }

    /// Instantiates a type handler for each field.
    ///
    /// The result is keyed by `field_type`, not by field: a later field
    /// sharing a type overwrites the earlier handler, so a collection
    /// with several fields of one type collapses to a single instance.
    /// Fields whose type the registry does not know get no entry.
    pub fn get_types(
        &self,
        registry: &FieldTypeRegistry,
        entry: Option<&EntryContext>,
    ) -> FieldTypeCollection {
        let mut types = FieldTypeCollection::new();
        for field in &self.fields {
            if let Some(handler) = registry.instantiate(field, entry) {
                types.insert(field.field_type.clone(), handler);
            }
        }
        types
    }
}

impl FromIterator<Field> for FieldCollection {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
