//! Project configuration loader describing where icons are referenced and written.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::project::IconSpriteLayout;

/// File name searched for in the project root by [`IconSpriteConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "icon_sprites.config.json";

/// Discoverable configuration describing the front-end layout and the generated sprite.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconSpriteConfig {
    /// Front-end source root, relative to the project root.
    pub frontend_dir: String,
    /// Directory name holding vendored packages. Pruned while scanning.
    pub dependency_dir_name: String,
    /// Import path prefix of the icon library, also its directory inside the dependency directory.
    pub icon_library: String,
    /// Suffix identifying front-end component files.
    pub component_extension: String,
    /// Substring identifying test files that must not be scanned.
    pub test_file_marker: String,
    /// Extension of the per-icon module files, without the leading dot.
    pub icon_module_extension: String,
    /// Sprite location, relative to the reference manuals output root.
    pub manifest_path: String,
    /// Bounding box declared on every generated symbol.
    pub view_box: String,
}

impl Default for IconSpriteConfig {
    fn default() -> Self {
        Self {
            frontend_dir: "taipy-fe".into(),
            dependency_dir_name: "node_modules".into(),
            icon_library: "@mui/icons-material".into(),
            component_extension: ".tsx".into(),
            test_file_marker: ".spec.".into(),
            icon_module_extension: "js".into(),
            manifest_path: "gui/viselements/mui-icons.svg".into(),
            view_box: "0 0 24 24".into(),
        }
    }
}

impl IconSpriteConfig {
    /// Attempt to load configuration from the provided project root.
    ///
    /// A missing or unparsable file falls back to the defaults so the documentation build
    /// keeps working on checkouts that never customised the layout.
    pub fn discover(root_dir: &Path) -> Self {
        let candidate = root_dir.join(DEFAULT_CONFIG_FILE);
        if !candidate.is_file() {
            return Self::default();
        }
        match Self::from_path(&candidate) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring {}: {err:#}", candidate.display());
                Self::default()
            }
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Borrow the configuration as a layout description.
    pub fn layout(&self) -> IconSpriteLayout<'_> {
        IconSpriteLayout {
            frontend_dir: &self.frontend_dir,
            dependency_dir_name: &self.dependency_dir_name,
            icon_library: &self.icon_library,
            component_extension: &self.component_extension,
            test_file_marker: &self.test_file_marker,
            icon_module_extension: &self.icon_module_extension,
            manifest_path: &self.manifest_path,
            view_box: &self.view_box,
        }
    }
}
