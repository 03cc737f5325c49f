//! GUI runner - launches the fitbuddy window

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui::{self, FontData, FontDefinitions, FontFamily, IconData};
use tracing::{debug, info, warn};

use super::app::FitBuddyApp;
use crate::avatar::parse_color;
use crate::config::Config;
use crate::motivation::{GeminiGenerator, MotivationClient};
use crate::sample_data;

const ICON_SIZE: u32 = 64;

/// Window icon: the starting avatar's head with two eyes
fn app_icon() -> IconData {
    let (r, g, b) = parse_color(&sample_data::initial_avatar().body_color).unwrap_or((16, 185, 129));
    let center = ICON_SIZE as f32 / 2.0;
    let head_radius = center - 2.0;
    let eyes = [(center - 9.0, center - 6.0), (center + 9.0, center - 6.0)];

    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            let in_eye = eyes
                .iter()
                .any(|(ex, ey)| (px - ex).powi(2) + (py - ey).powi(2) <= 25.0);
            let in_head = (px - center).powi(2) + (py - center).powi(2) <= head_radius.powi(2);
            let pixel = match (in_head, in_eye) {
                (true, true) => [255, 255, 255, 255],
                (true, false) => [r, g, b, 255],
                _ => [0, 0, 0, 0],
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    IconData {
        rgba,
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}

/// Run the main GUI application. Must be called from within a tokio runtime.
pub fn run_gui(config: Config) -> Result<()> {
    let runtime = tokio::runtime::Handle::try_current().context("The GUI needs a tokio runtime")?;

    let api_key = config.api_key();
    if api_key.is_empty() {
        warn!(
            "[fitbuddy] {} is not set; showing built-in motivation lines",
            config.motivation.api_key_env
        );
    }
    let generator = GeminiGenerator::with_url(&config.motivation.base_url, api_key);
    let client = MotivationClient::new(Arc::new(generator), config.motivation.model.clone());

    info!("[fitbuddy] Starting GUI (model {})", client.model());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("fitbuddy")
            .with_inner_size([config.gui.width, config.gui.height])
            .with_min_inner_size([720.0, 480.0])
            .with_decorations(true)
            .with_resizable(true)
            .with_icon(Arc::new(app_icon())),
        centered: true,
        ..Default::default()
    };

    let app = FitBuddyApp::new(config, &runtime, client);

    eframe::run_native(
        "fitbuddy",
        options,
        Box::new(|cc| {
            install_fallback_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}

/// Symbol and emoji fonts tried on every platform; missing files are skipped
const FALLBACK_FONTS: &[&str] = &[
    "/System/Library/Fonts/Apple Symbols.ttf",
    "C:\\Windows\\Fonts\\seguiemj.ttf",
    "C:\\Windows\\Fonts\\seguisym.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

fn install_fallback_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    for (name, data) in load_fonts(FALLBACK_FONTS, |path| std::fs::read(path).ok()) {
        debug!("[fitbuddy] Using fallback font {}", name);
        fonts.font_data.insert(name.clone(), FontData::from_owned(data).into());
        fonts.families.entry(FontFamily::Proportional).or_default().push(name);
    }
    ctx.set_fonts(fonts);
}

/// Read each readable path, keyed by file stem
fn load_fonts(paths: &[&str], read: impl Fn(&str) -> Option<Vec<u8>>) -> Vec<(String, Vec<u8>)> {
    paths
        .iter()
        .copied()
        .filter_map(|path| {
            let data = read(path)?;
            let name = Path::new(path).file_stem()?.to_string_lossy().into_owned();
            Some((name, data))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_dimensions_and_transparent_corner() {
        let icon = app_icon();
        assert_eq!(icon.rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        assert_eq!(&icon.rgba[0..4], &[0, 0, 0, 0]);

        let center = ((ICON_SIZE / 2 * ICON_SIZE + ICON_SIZE / 2) * 4) as usize;
        assert_eq!(&icon.rgba[center..center + 4], &[16, 185, 129, 255]);
    }

    #[test]
    fn test_load_fonts_skips_missing_files() {
        let paths = ["/fonts/Symbols.ttf", "/fonts/Missing.ttf", "/other/Emoji.otf"];
        let loaded = load_fonts(&paths, |path| (!path.contains("Missing")).then(|| vec![1, 2, 3]));

        let names: Vec<&str> = loaded.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Symbols", "Emoji"]);
        assert_eq!(loaded[0].1, vec![1, 2, 3]);
    }
}
