//! Icon discovery and sprite generation, split into focused submodules for easier testing.

mod differ;
mod extraction;
mod patterns;
mod rendering;
mod scanning;

pub use differ::{needs_regeneration, parse_manifest_icons, read_manifest_icons};
pub use extraction::{extract_svg_paths, load_icon_symbol, load_icon_symbols};
pub use patterns::{icon_import_pattern, svg_path_pattern, symbol_id_pattern};
pub use rendering::{render_sprite, write_sprite};
pub use scanning::{collect_icon_references, extract_icon_references, is_component_file};
