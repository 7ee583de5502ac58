use eframe::egui::{self, Color32, Context, Rounding};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Colors are stored as "#rrggbb" hex so theme files stay hand-editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
    pub bg: String,
    pub panel: String,
    pub text: String,
    pub muted_text: String,
    pub accent: String,
    pub accent_soft: String,
    pub danger: String,
    pub border: String,
    pub radius: f32,
    pub font_size_base: f32,
}

pub fn presets_file(base: &Path) -> PathBuf {
    base.join("themes").join("presets.json")
}

pub fn ensure_theme_files(base: &Path) -> io::Result<()> {
    let path = presets_file(base);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    if !path.exists() {
        let json = serde_json::to_string_pretty(&default_presets())?;
        fs::write(&path, json)?;
    }
    Ok(())
}

pub fn load_presets(base: &Path) -> Vec<ThemeConfig> {
    match fs::read_to_string(presets_file(base)) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("themes/presets.json is unreadable ({e}); using built-ins");
            default_presets()
        }),
        Err(_) => default_presets(),
    }
}

/// Picks the preferred preset by name, or the first built-in when the name
/// is unknown or nothing was asked for.
pub fn load_theme(base: &Path, preferred: Option<&str>) -> ThemeConfig {
    let presets = load_presets(base);
    if let Some(name) = preferred {
        if let Some(found) = presets.iter().find(|p| p.name == name) {
            return found.clone();
        }
    }
    presets
        .into_iter()
        .next()
        .unwrap_or_else(|| default_presets()[0].clone())
}

pub fn apply_theme(theme: &ThemeConfig, ctx: &Context) {
    let mut style = (*ctx.style()).clone();
    let mut visuals = if is_dark(theme) {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    let text = parse_color(&theme.text);
    let border = parse_color(&theme.border);
    visuals.panel_fill = parse_color(&theme.panel);
    visuals.window_fill = parse_color(&theme.bg);
    visuals.warn_fg_color = parse_color(&theme.danger);
    visuals.hyperlink_color = parse_color(&theme.accent);

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
    ] {
        widget.bg_fill = parse_color(&theme.bg);
        widget.fg_stroke.color = text;
        widget.bg_stroke.color = border;
        widget.rounding = Rounding::same(theme.radius);
    }
    for widget in [&mut visuals.widgets.hovered, &mut visuals.widgets.active] {
        widget.bg_fill = parse_color(&theme.accent_soft);
        widget.fg_stroke.color = text;
        widget.bg_stroke.color = parse_color(&theme.accent);
        widget.rounding = Rounding::same(theme.radius);
    }
    visuals.window_rounding = Rounding::same(theme.radius);

    style.text_styles = [
        (
            egui::TextStyle::Small,
            egui::FontId::proportional(theme.font_size_base - 2.0),
        ),
        (
            egui::TextStyle::Body,
            egui::FontId::proportional(theme.font_size_base),
        ),
        (
            egui::TextStyle::Button,
            egui::FontId::proportional(theme.font_size_base),
        ),
        (
            egui::TextStyle::Heading,
            egui::FontId::proportional(theme.font_size_base + 6.0),
        ),
        (
            egui::TextStyle::Monospace,
            egui::FontId::monospace(theme.font_size_base - 1.0),
        ),
    ]
    .into();
    style.visuals = visuals;
    ctx.set_style(style);
}

fn is_dark(theme: &ThemeConfig) -> bool {
    let panel = parse_color(&theme.panel);
    let luminance =
        0.2126 * (panel.r() as f32) + 0.7152 * (panel.g() as f32) + 0.0722 * (panel.b() as f32);
    luminance < 128.0
}

pub fn parse_color(hex: &str) -> Color32 {
    let h = hex.trim_start_matches('#');
    if h.len() == 6 {
        if let Ok(rgb) = u32::from_str_radix(h, 16) {
            return Color32::from_rgb(
                ((rgb >> 16) & 0xFF) as u8,
                ((rgb >> 8) & 0xFF) as u8,
                (rgb & 0xFF) as u8,
            );
        }
    }
    Color32::GRAY
}

pub fn default_presets() -> Vec<ThemeConfig> {
    vec![
        ThemeConfig {
            name: "daylight".to_string(),
            bg: "#f6f7fb".to_string(),
            panel: "#ffffff".to_string(),
            text: "#1c2733".to_string(),
            muted_text: "#5f7185".to_string(),
            accent: "#2563eb".to_string(),
            accent_soft: "#dbe7ff".to_string(),
            danger: "#d83a3a".to_string(),
            border: "#d3d9e0".to_string(),
            radius: 6.0,
            font_size_base: 16.0,
        },
        ThemeConfig {
            name: "slate_night".to_string(),
            bg: "#1b232c".to_string(),
            panel: "#141b23".to_string(),
            text: "#e7eef7".to_string(),
            muted_text: "#93a6ba".to_string(),
            accent: "#4f8ef7".to_string(),
            accent_soft: "#1f3350".to_string(),
            danger: "#f06a6a".to_string(),
            border: "#2c3844".to_string(),
            radius: 6.0,
            font_size_base: 16.0,
        },
        ThemeConfig {
            name: "high_visibility".to_string(),
            bg: "#000000".to_string(),
            panel: "#0c0c0c".to_string(),
            text: "#ffffff".to_string(),
            muted_text: "#cfcfcf".to_string(),
            accent: "#ffd000".to_string(),
            accent_soft: "#4a3c00".to_string(),
            danger: "#ff5252".to_string(),
            border: "#ffffff".to_string(),
            radius: 0.0,
            font_size_base: 18.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_preferred_theme_falls_back_to_first_preset() {
        let dir = tempfile::tempdir().unwrap();
        ensure_theme_files(dir.path()).unwrap();
        let theme = load_theme(dir.path(), Some("no_such_theme"));
        assert_eq!(theme.name, default_presets()[0].name);
    }

    #[test]
    fn preferred_theme_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        ensure_theme_files(dir.path()).unwrap();
        let theme = load_theme(dir.path(), Some("slate_night"));
        assert_eq!(theme.name, "slate_night");
    }

    #[test]
    fn hex_colors_parse_and_garbage_greys_out() {
        assert_eq!(parse_color("#ff0000"), Color32::from_rgb(255, 0, 0));
        assert_eq!(parse_color("nonsense"), Color32::GRAY);
    }
}
