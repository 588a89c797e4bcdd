//! Sprite rendering and output.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{StepError, StepResult};
use crate::models::IconSymbol;

const SPRITE_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="0">"#;
const SPRITE_CLOSE: &str = "</svg>";

/// Render the sprite holding one `<symbol>` per icon, in the order given.
///
/// Path data is written verbatim. A single path sits directly in its symbol, several
/// paths are wrapped in a `<g>` element.
pub fn render_sprite(symbols: &[IconSymbol], view_box: &str) -> String {
  let mut out = String::new();
  out.push_str(SPRITE_OPEN);
  out.push('\n');

  for symbol in symbols {
    let _ = writeln!(out, r#"  <symbol id="{}" viewBox="{}">"#, symbol.id, view_box);
    match symbol.paths.as_slice() {
      [single] => {
        let _ = writeln!(out, r#"    <path d="{single}"/>"#);
      }
      paths => {
        out.push_str("    <g>\n");
        for path in paths {
          let _ = writeln!(out, r#"      <path d="{path}"/>"#);
        }
        out.push_str("    </g>\n");
      }
    }
    out.push_str("  </symbol>\n");
  }

  out.push_str(SPRITE_CLOSE);
  out.push('\n');
  out
}

/// Replace the sprite at `path` with `content`, creating its parent directory when needed.
pub fn write_sprite(path: &Path, content: &str) -> StepResult<()> {
  let write_error = |source| StepError::WriteManifest {
    path: path.to_path_buf(),
    source,
  };

  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).map_err(write_error)?;
  }
  fs::write(path, content).map_err(write_error)
}
