//! Data structures produced while refreshing the icon sprite.

use std::collections::BTreeSet;

/// Set of icon identifiers. Ordered so iteration yields the sprite's symbol order.
pub type IconReferenceSet = BTreeSet<String>;

/// Drawing data extracted for a single icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSymbol {
  /// Icon identifier, used as the symbol id.
  pub id: String,
  /// Path descriptions in the order they appear in the icon module.
  pub paths: Vec<String>,
}

/// Outcome of a sprite refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteRefresh {
  /// The sprite already documents exactly the referenced icons. Nothing was written.
  Unchanged {
    /// Number of referenced icons.
    icons: usize,
  },
  /// The sprite was rewritten.
  Regenerated {
    /// Icons written to the sprite, in order.
    written: Vec<String>,
    /// Referenced icons left out because their module was unusable.
    skipped: Vec<String>,
  },
}

impl SpriteRefresh {
  /// Returns `true` when the sprite file was rewritten.
  pub fn is_regenerated(&self) -> bool {
    matches!(self, Self::Regenerated { .. })
  }
}
