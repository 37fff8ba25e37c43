use std::path::Path;

use clockface_engine::text::{FontId, FontSystem};

/// Sans-serif faces tried in order when looking for a numeral font.
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Loads the first readable, parseable font in `paths`.
pub fn load_first<P: AsRef<Path>>(
    fonts: &mut FontSystem,
    paths: impl IntoIterator<Item = P>,
) -> Option<FontId> {
    for path in paths {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };
        match fonts.load_font(&bytes) {
            Ok(id) => {
                log::info!("numeral font: {}", path.display());
                return Some(id);
            }
            Err(e) => log::debug!("skipping {}: {e}", path.display()),
        }
    }
    None
}

/// Searches [`SYSTEM_FONT_PATHS`].
pub fn load_system_font(fonts: &mut FontSystem) -> Option<FontId> {
    load_first(fonts, SYSTEM_FONT_PATHS)
}
