//! Mapping raw port names to identifiers safe for model lookup.
//!
//! Front-ends may prefix names with a namespacing marker (`\`) and compiled
//! models escape the separator character (`_`) by doubling it. [`sanitize`]
//! applies both rules; [`NameTable`] caches the result per port so that the
//! identifier used to apply stimulus and the identifier used to sample
//! outputs always agree.

use crate::port::ModuleInterface;

/// Leading namespacing marker stripped from raw names.
pub const NAME_MARKER: char = '\\';

/// Separator character escaped by doubling in sanitized names.
pub const NAME_SEPARATOR: char = '_';

/// Maps a raw port name to a safe model identifier.
///
/// Strips exactly one leading marker if present, then doubles every
/// occurrence of the separator. Pure and deterministic; idempotent for
/// names containing no separator.
pub fn sanitize(raw: &str) -> String {
    let stripped = raw.strip_prefix(NAME_MARKER).unwrap_or(raw);
    stripped.replace(NAME_SEPARATOR, "__")
}

/// Cached sanitized names for every port of an interface.
///
/// Computed once at harness construction and never recomputed mid-run, so
/// recorded output keys match applied-stimulus keys for the whole run.
#[derive(Clone, Debug)]
pub struct NameTable {
    entries: Vec<(String, String)>,
}

impl NameTable {
    /// Builds the table from an interface, one entry per port in order.
    pub fn new(interface: &ModuleInterface) -> Self {
        let entries = interface
            .ports
            .iter()
            .map(|p| (p.name.clone(), sanitize(&p.name)))
            .collect();
        Self { entries }
    }

    /// Looks up the cached sanitized name for a raw port name.
    pub fn get(&self, raw: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(r, _)| r == raw)
            .map(|(_, s)| s.as_str())
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
