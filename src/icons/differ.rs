//! Comparison between the referenced icons and the ones already present in the sprite.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::icons::patterns::symbol_id_pattern;
use crate::models::IconReferenceSet;

/// Read the symbol ids documented by the sprite at `path`.
///
/// A missing sprite yields an empty set. A sprite that exists but cannot be read is
/// reported and also treated as empty, which forces a rewrite.
pub fn read_manifest_icons(path: &Path) -> IconReferenceSet {
  match fs::read_to_string(path) {
    Ok(content) => parse_manifest_icons(&content),
    Err(err) if err.kind() == ErrorKind::NotFound => IconReferenceSet::new(),
    Err(err) => {
      log::warn!(
        "could not read existing icon sprite {}: {err}",
        path.display()
      );
      IconReferenceSet::new()
    }
  }
}

/// Extract symbol ids from sprite text without parsing it as markup.
pub fn parse_manifest_icons(content: &str) -> IconReferenceSet {
  symbol_id_pattern()
    .captures_iter(content)
    .filter_map(|caps| caps.get(1))
    .map(|id| id.as_str().to_string())
    .collect()
}

/// Returns `true` when the sprite must be rewritten to match the referenced icons.
pub fn needs_regeneration(existing: &IconReferenceSet, referenced: &IconReferenceSet) -> bool {
  existing != referenced
}
