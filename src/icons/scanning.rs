//! Front-end tree scanning for icon import references.

use std::fs;
use std::path::Path;

use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::error::{StepError, StepResult};
use crate::icons::patterns::icon_import_pattern;
use crate::models::IconReferenceSet;
use crate::project::IconSpriteLayout;

/// Walk the front-end tree under `root` and collect every icon imported from the icon library.
///
/// Symlinked directories are followed. Directories named after the dependency directory
/// are pruned wherever they appear. Any entry or file that cannot be read, including a
/// symlink loop, aborts the scan.
pub fn collect_icon_references(
    root: &Path,
    layout: &IconSpriteLayout,
) -> StepResult<IconReferenceSet> {
    let import_pattern = icon_import_pattern(layout.icon_library)?;
    let mut icons = IconReferenceSet::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_pruned_dir(entry, layout.dependency_dir_name));

    for entry in walker {
        let entry = entry.map_err(|source| StepError::Traverse {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !is_component_file(&name, layout) {
            continue;
        }

        let path = entry.path();
        let content = fs::read_to_string(path).map_err(|source| StepError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        let found = extract_icon_references(&content, &import_pattern, &mut icons);
        if found > 0 {
            log::debug!("{}: {found} icon import(s)", path.display());
        }
    }

    Ok(icons)
}

/// Add every icon imported in `content` to `icons`, returning the number of matches.
pub fn extract_icon_references(
    content: &str,
    import_pattern: &Regex,
    icons: &mut IconReferenceSet,
) -> usize {
    let mut found = 0;
    for caps in import_pattern.captures_iter(content) {
        if let Some(icon) = caps.get(1) {
            icons.insert(icon.as_str().to_string());
            found += 1;
        }
    }
    found
}

/// Component files carry the configured suffix and are not test files.
pub fn is_component_file(file_name: &str, layout: &IconSpriteLayout) -> bool {
    file_name.ends_with(layout.component_extension) && !file_name.contains(layout.test_file_marker)
}

fn is_pruned_dir(entry: &DirEntry, dependency_dir_name: &str) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == dependency_dir_name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconSpriteConfig;
    use tempfile::tempdir;

    fn write_file(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn recognises_component_files() {
        let config = IconSpriteConfig::default();
        let layout = config.layout();
        assert!(is_component_file("Table.tsx", &layout));
        assert!(!is_component_file("Table.spec.tsx", &layout));
        assert!(!is_component_file("Table.ts", &layout));
        assert!(!is_component_file("table.tsx.map", &layout));
    }

    #[test]
    fn extracts_and_deduplicates_references() {
        let pattern = icon_import_pattern("@mui/icons-material").unwrap();
        let source = r#"
import React from "react";
import AddIcon from "@mui/icons-material/Add";
import Add from "@mui/icons-material/Add";
import CloseIcon   from   "@mui/icons-material/Close";
"#;
        let mut icons = IconReferenceSet::new();
        let found = extract_icon_references(source, &pattern, &mut icons);

        assert_eq!(found, 3);
        assert_eq!(icons.into_iter().collect::<Vec<_>>(), vec!["Add", "Close"]);
    }

    #[test]
    fn matches_imports_inside_comments() {
        let pattern = icon_import_pattern("@mui/icons-material").unwrap();
        let mut icons = IconReferenceSet::new();
        extract_icon_references(
            r#"// import Old from "@mui/icons-material/Archive";"#,
            &pattern,
            &mut icons,
        );
        assert!(icons.contains("Archive"));
    }

    #[test]
    fn scans_tree_recursively_with_pruning_and_test_exclusion() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_file(
            &root.join("src/components/Table.tsx"),
            r#"import DeleteIcon from "@mui/icons-material/Delete";"#,
        );
        write_file(
            &root.join("src/deep/nested/Chart.tsx"),
            r#"import Zoom from "@mui/icons-material/ZoomIn";"#,
        );
        write_file(
            &root.join("src/components/Table.spec.tsx"),
            r#"import Spec from "@mui/icons-material/FromSpec";"#,
        );
        write_file(
            &root.join("src/utils.ts"),
            r#"import Ts from "@mui/icons-material/FromTs";"#,
        );
        write_file(
            &root.join("node_modules/pkg/Vendored.tsx"),
            r#"import V from "@mui/icons-material/Vendored";"#,
        );
        write_file(
            &root.join("src/node_modules/pkg/Nested.tsx"),
            r#"import N from "@mui/icons-material/NestedVendored";"#,
        );

        let config = IconSpriteConfig::default();
        let icons = collect_icon_references(root, &config.layout()).unwrap();

        assert_eq!(icons.into_iter().collect::<Vec<_>>(), vec!["Delete", "ZoomIn"]);
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_component_directories() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("frontend");
        let outside = dir.path().join("outside/shared");
        write_file(
            &outside.join("Button.tsx"),
            r#"import A from "@mui/icons-material/Linked";"#,
        );
        write_file(
            &dir.path().join("outside/node_modules/Vendored.tsx"),
            r#"import V from "@mui/icons-material/Vendored";"#,
        );
        fs::create_dir_all(root.join("src")).unwrap();
        std::os::unix::fs::symlink(&outside, root.join("src/shared")).unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("outside/node_modules"),
            root.join("node_modules"),
        )
        .unwrap();

        let config = IconSpriteConfig::default();
        let icons = collect_icon_references(&root, &config.layout()).unwrap();

        assert_eq!(icons.into_iter().collect::<Vec<_>>(), vec!["Linked"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_is_a_traversal_error() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("frontend");
        fs::create_dir_all(root.join("src")).unwrap();
        std::os::unix::fs::symlink(&root, root.join("src/again")).unwrap();

        let config = IconSpriteConfig::default();
        let err = collect_icon_references(&root, &config.layout()).unwrap_err();
        assert!(matches!(err, StepError::Traverse { .. }));
    }

    #[test]
    fn empty_tree_yields_empty_set() {
        let dir = tempdir().unwrap();
        let config = IconSpriteConfig::default();
        let icons = collect_icon_references(dir.path(), &config.layout()).unwrap();
        assert!(icons.is_empty());
    }

    #[test]
    fn unreadable_component_file_aborts_scan() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Broken.tsx");
        // Invalid UTF-8 cannot be read as text.
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let config = IconSpriteConfig::default();
        let err = collect_icon_references(dir.path(), &config.layout()).unwrap_err();
        match err {
            StepError::ReadSource { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_root_is_a_traversal_error() {
        let dir = tempdir().unwrap();
        let config = IconSpriteConfig::default();
        let err = collect_icon_references(&dir.path().join("absent"), &config.layout()).unwrap_err();
        assert!(matches!(err, StepError::Traverse { .. }));
    }
}
