//! Layout and context types shared by the icon sprite step.

use std::path::{Path, PathBuf};

/// Borrowed description of where icons are referenced, stored and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpriteLayout<'a> {
  /// Front-end source root, relative to the project root.
  pub frontend_dir: &'a str,
  /// Directory name holding vendored packages.
  pub dependency_dir_name: &'a str,
  /// Import path prefix and directory name of the icon library.
  pub icon_library: &'a str,
  /// Suffix identifying front-end component files.
  pub component_extension: &'a str,
  /// Substring identifying test files.
  pub test_file_marker: &'a str,
  /// Extension of the per-icon module files.
  pub icon_module_extension: &'a str,
  /// Sprite location relative to the reference manuals root.
  pub manifest_path: &'a str,
  /// Bounding box declared on each symbol.
  pub view_box: &'a str,
}

/// Context handed to each lifecycle phase by the documentation build.
#[derive(Debug, Clone, Copy)]
pub struct SetupContext<'a> {
  /// Root of the checked out sources.
  pub root_dir: &'a Path,
  /// Output root for the generated reference manuals.
  pub ref_manuals_dir: &'a Path,
}

impl<'a> SetupContext<'a> {
  /// Create a context from the two roots.
  pub fn new(root_dir: &'a Path, ref_manuals_dir: &'a Path) -> Self {
    Self {
      root_dir,
      ref_manuals_dir,
    }
  }
}

/// Absolute locations derived from a [`SetupContext`] and an [`IconSpriteLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpritePaths {
  /// Front-end source root that is scanned for icon imports.
  pub frontend_dir: PathBuf,
  /// Vendored package directory inside the front-end root.
  pub dependency_dir: PathBuf,
  /// Directory holding one module per icon.
  pub icon_modules_dir: PathBuf,
  /// Generated sprite file.
  pub manifest_path: PathBuf,
}

impl SpritePaths {
  /// Resolve every location used by the step. Nothing is touched on disk.
  pub fn resolve(layout: &IconSpriteLayout, context: &SetupContext) -> Self {
    let frontend_dir = context.root_dir.join(layout.frontend_dir);
    let dependency_dir = frontend_dir.join(layout.dependency_dir_name);
    let icon_modules_dir = layout
      .icon_library
      .split('/')
      .filter(|segment| !segment.is_empty())
      .fold(dependency_dir.clone(), |dir, segment| dir.join(segment));
    let manifest_path = context.ref_manuals_dir.join(layout.manifest_path);

    Self {
      frontend_dir,
      dependency_dir,
      icon_modules_dir,
      manifest_path,
    }
  }

  /// Module file holding the drawing data for `icon`.
  pub fn icon_module_path(&self, layout: &IconSpriteLayout, icon: &str) -> PathBuf {
    self
      .icon_modules_dir
      .join(format!("{icon}.{}", layout.icon_module_extension))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::IconSpriteConfig;

  #[test]
  fn resolves_paths_from_default_layout() {
    let config = IconSpriteConfig::default();
    let layout = config.layout();
    let context = SetupContext::new(Path::new("/src"), Path::new("/out/manuals"));
    let paths = SpritePaths::resolve(&layout, &context);

    assert_eq!(paths.frontend_dir, PathBuf::from("/src/taipy-fe"));
    assert_eq!(paths.dependency_dir, PathBuf::from("/src/taipy-fe/node_modules"));
    assert_eq!(
      paths.icon_modules_dir,
      PathBuf::from("/src/taipy-fe/node_modules/@mui/icons-material")
    );
    assert_eq!(
      paths.manifest_path,
      PathBuf::from("/out/manuals/gui/viselements/mui-icons.svg")
    );
    assert_eq!(
      paths.icon_module_path(&layout, "Add"),
      PathBuf::from("/src/taipy-fe/node_modules/@mui/icons-material/Add.js")
    );
  }
}
