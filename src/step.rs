//! Documentation build step regenerating the icon sprite.
//!
//! The step is a three stage pipeline. The referenced icons are computed from the
//! front-end sources, compared against the icons the current sprite documents, and
//! the sprite is rewritten only when the two sets differ.

use std::path::Path;

use crate::error::{StepError, StepResult};
use crate::icons::{
  collect_icon_references, load_icon_symbols, needs_regeneration, read_manifest_icons,
  render_sprite, write_sprite,
};
use crate::models::{IconReferenceSet, SpriteRefresh};
use crate::project::{IconSpriteLayout, SetupContext, SpritePaths};

/// Lifecycle contract between the documentation build and one of its steps.
pub trait SetupStep {
  /// Stable identifier of the step.
  fn id(&self) -> &str;

  /// One line summary shown by the documentation build.
  fn description(&self) -> &str;

  /// Validate preconditions before any step does work.
  fn enter(&mut self, context: &SetupContext) -> StepResult<()>;

  /// Perform the step's work.
  fn setup(&mut self, context: &SetupContext) -> StepResult<()>;
}

/// Collects the icons imported by the front-end into a single SVG sprite.
#[derive(Debug, Clone)]
pub struct IconSpriteStep<'a> {
  layout: IconSpriteLayout<'a>,
  last_refresh: Option<SpriteRefresh>,
}

impl<'a> IconSpriteStep<'a> {
  /// Create a step for the provided layout.
  pub fn new(layout: IconSpriteLayout<'a>) -> Self {
    Self {
      layout,
      last_refresh: None,
    }
  }

  /// Locations used by the step for `context`.
  pub fn paths(&self, context: &SetupContext) -> SpritePaths {
    SpritePaths::resolve(&self.layout, context)
  }

  /// Outcome of the last successful [`SetupStep::setup`] call.
  pub fn last_refresh(&self) -> Option<&SpriteRefresh> {
    self.last_refresh.as_ref()
  }

  /// Scan the front-end and rewrite the sprite when the referenced icons changed.
  pub fn refresh(&self, context: &SetupContext) -> StepResult<SpriteRefresh> {
    let paths = self.paths(context);
    let referenced = self.scan(&paths)?;
    let existing = read_manifest_icons(&paths.manifest_path);

    if !needs_regeneration(&existing, &referenced) {
      log::info!(
        "icon sprite {} is up to date ({} icons)",
        paths.manifest_path.display(),
        referenced.len()
      );
      return Ok(SpriteRefresh::Unchanged {
        icons: referenced.len(),
      });
    }

    log::info!(
      "generating icon sprite {} ({} icons)",
      paths.manifest_path.display(),
      referenced.len()
    );
    let (symbols, skipped) = load_icon_symbols(&self.layout, &paths, &referenced);
    write_sprite(
      &paths.manifest_path,
      &render_sprite(&symbols, self.layout.view_box),
    )?;

    Ok(SpriteRefresh::Regenerated {
      written: symbols.into_iter().map(|symbol| symbol.id).collect(),
      skipped,
    })
  }

  /// Report whether the sprite is stale without writing anything.
  pub fn check(&self, context: &SetupContext) -> StepResult<bool> {
    let paths = self.paths(context);
    let referenced = self.scan(&paths)?;
    let existing = read_manifest_icons(&paths.manifest_path);
    Ok(needs_regeneration(&existing, &referenced))
  }

  fn scan(&self, paths: &SpritePaths) -> StepResult<IconReferenceSet> {
    require_dir("front-end code", &paths.frontend_dir)?;
    // Only present once the front-end dependencies were installed by an earlier step.
    require_dir(self.layout.dependency_dir_name, &paths.dependency_dir)?;
    collect_icon_references(&paths.frontend_dir, &self.layout)
  }
}

impl SetupStep for IconSpriteStep<'_> {
  fn id(&self) -> &str {
    "mui-icons"
  }

  fn description(&self) -> &str {
    "Extracts and groups all icons used in the front-end code"
  }

  fn enter(&mut self, context: &SetupContext) -> StepResult<()> {
    require_dir("front-end code", &self.paths(context).frontend_dir)
  }

  fn setup(&mut self, context: &SetupContext) -> StepResult<()> {
    let refresh = self.refresh(context)?;
    if let SpriteRefresh::Regenerated { written, skipped } = &refresh {
      log::info!(
        "wrote {} icon(s), skipped {}",
        written.len(),
        skipped.len()
      );
    }
    self.last_refresh = Some(refresh);
    Ok(())
  }
}

fn require_dir(role: &str, path: &Path) -> StepResult<()> {
  if path.is_dir() {
    Ok(())
  } else {
    Err(StepError::MissingDirectory {
      role: role.to_string(),
      path: path.to_path_buf(),
    })
  }
}
