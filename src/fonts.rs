//! CJK font fallback so radicals render.
//! egui's bundled fonts have no CJK coverage, so a system font is looked up on disk.

use egui::{FontData, FontDefinitions, FontFamily};
use std::path::{Path, PathBuf};

const CJK_FONT_KEY: &str = "cjk-fallback";

/// Font files tried in order; the first readable one wins.
const CJK_FONT_CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\YuGothB.ttc",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
    // macOS
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/System/Library/Fonts/ヒラギノ角ゴシック W6.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Bold.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
];

fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // A font shipped next to the executable takes priority
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            paths.push(dir.join("fonts").join("NotoSansCJK-Regular.ttc"));
        }
    }
    paths.extend(CJK_FONT_CANDIDATES.iter().map(PathBuf::from));
    paths
}

fn read_first(paths: &[PathBuf]) -> Option<(&Path, Vec<u8>)> {
    paths
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|data| (path.as_path(), data)))
}

/// Appends the CJK font as a fallback to both families.
pub fn with_cjk_fallback(mut fonts: FontDefinitions, data: Vec<u8>) -> FontDefinitions {
    fonts
        .font_data
        .insert(CJK_FONT_KEY.to_owned(), FontData::from_owned(data));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_KEY.to_owned());
    }
    fonts
}

pub fn install(ctx: &egui::Context) {
    let paths = search_paths();
    match read_first(&paths) {
        Some((path, data)) => {
            log::info!("Using CJK font '{}'", path.display());
            ctx.set_fonts(with_cjk_fallback(FontDefinitions::default(), data));
        }
        None => log::warn!("No CJK font found, radicals may not render"),
    }
}
