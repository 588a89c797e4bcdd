//! Drawing data extraction from per-icon modules.

use std::fs;

use crate::error::IconSourceError;
use crate::icons::patterns::svg_path_pattern;
use crate::models::{IconReferenceSet, IconSymbol};
use crate::project::{IconSpriteLayout, SpritePaths};

/// Return the path descriptions found in an icon module, in order of appearance.
pub fn extract_svg_paths(module_source: &str) -> Vec<String> {
    svg_path_pattern()
        .captures_iter(module_source)
        .filter_map(|caps| caps.get(1))
        .map(|path| path.as_str().to_string())
        .collect()
}

/// Read the module for `icon` and extract its drawing data.
pub fn load_icon_symbol(
    layout: &IconSpriteLayout,
    paths: &SpritePaths,
    icon: &str,
) -> Result<IconSymbol, IconSourceError> {
    let module_path = paths.icon_module_path(layout, icon);
    let source = fs::read_to_string(&module_path).map_err(|source| IconSourceError::Unreadable {
        icon: icon.to_string(),
        path: module_path.clone(),
        source,
    })?;

    let svg_paths = extract_svg_paths(&source);
    if svg_paths.is_empty() {
        return Err(IconSourceError::NoPaths {
            icon: icon.to_string(),
            path: module_path,
        });
    }

    Ok(IconSymbol {
        id: icon.to_string(),
        paths: svg_paths,
    })
}

/// Load every referenced icon, in identifier order.
///
/// Icons that cannot be loaded are logged and returned separately so the batch continues.
pub fn load_icon_symbols(
    layout: &IconSpriteLayout,
    paths: &SpritePaths,
    icons: &IconReferenceSet,
) -> (Vec<IconSymbol>, Vec<String>) {
    let mut symbols = Vec::with_capacity(icons.len());
    let mut skipped = Vec::new();

    for icon in icons {
        match load_icon_symbol(layout, paths, icon) {
            Ok(symbol) => symbols.push(symbol),
            Err(err) => {
                log::error!("{err}");
                skipped.push(icon.clone());
            }
        }
    }

    (symbols, skipped)
}
