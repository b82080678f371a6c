//! UI palette plus terminal colour-depth fallback.

use ratatui::style::Color;

/// Counter accent, drawn at the animated intensity.
pub const COUNTER_ACCENT_RGB: (u8, u8, u8) = (66, 153, 225);

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub header_fg: Color,
    pub accent_fg: Color,
    pub muted_fg: Color,
    pub required_fg: Color,
    pub warning_fg: Color,
    pub success_fg: Color,
    pub error_fg: Color,
    pub selected_bg: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub counter_fg: Color,
    support: TerminalColorSupport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("USERDESK_COLOR_SUPPORT") {
        if let Some(support) = parse_color_support(&value) {
            return support;
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    color_support_from_env(&colorterm, &term)
}

fn parse_color_support(value: &str) -> Option<TerminalColorSupport> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" | "rgb" => Some(TerminalColorSupport::TrueColor),
        "256" | "ansi256" => Some(TerminalColorSupport::Ansi256),
        "16" | "ansi16" | "basic" => Some(TerminalColorSupport::Ansi16),
        _ => None,
    }
}

fn color_support_from_env(colorterm: &str, term: &str) -> TerminalColorSupport {
    let direct = |s: &str| s.contains("truecolor") || s.contains("24bit") || s.contains("direct");
    if direct(colorterm) || direct(term) {
        return TerminalColorSupport::TrueColor;
    }
    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }
    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Indexed(6),    // Cyan
            inactive_border: Color::Indexed(8), // DarkGray
            header_fg: Color::Indexed(6),
            accent_fg: Color::Rgb(66, 153, 225),
            muted_fg: Color::Indexed(8),
            required_fg: Color::Indexed(1),  // Red
            warning_fg: Color::Indexed(3),   // Yellow
            success_fg: Color::Indexed(2),   // Green
            error_fg: Color::Indexed(1),
            selected_bg: Color::Indexed(8),
            dialog_bg: Color::Reset,
            dialog_fg: Color::Indexed(15), // White
            counter_fg: Color::Indexed(15),
            support: TerminalColorSupport::TrueColor,
        }
    }
}

impl UiTheme {
    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    pub fn color_support(&self) -> TerminalColorSupport {
        self.support
    }

    pub(crate) fn apply_color_support(&mut self, support: TerminalColorSupport) {
        self.support = support;
        if support == TerminalColorSupport::TrueColor {
            return;
        }

        for color in [
            &mut self.focus_border,
            &mut self.inactive_border,
            &mut self.header_fg,
            &mut self.accent_fg,
            &mut self.muted_fg,
            &mut self.required_fg,
            &mut self.warning_fg,
            &mut self.success_fg,
            &mut self.error_fg,
            &mut self.selected_bg,
            &mut self.dialog_bg,
            &mut self.dialog_fg,
            &mut self.counter_fg,
        ] {
            *color = map_color_for_support(*color, support);
        }
    }

    /// Background for one row of the counter gradient.
    ///
    /// `row` 0 is the top. The accent fades from `intensity` at the top to nothing at the
    /// bottom, composited over black. Returns `None` once the row is fully transparent.
    pub fn counter_gradient(&self, intensity: f32, row: u16, height: u16) -> Option<Color> {
        if height == 0 {
            return None;
        }
        let fade = 1.0 - f32::from(row) / f32::from(height);
        let alpha = (intensity * fade).clamp(0.0, 1.0);
        if alpha <= f32::EPSILON {
            return None;
        }
        let (r, g, b) = COUNTER_ACCENT_RGB;
        let scale = |c: u8| (f32::from(c) * alpha).round() as u8;
        let color = Color::Rgb(scale(r), scale(g), scale(b));
        Some(map_color_for_support(color, self.support))
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (_, value) => value,
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    nearest_index((0u16..=255).map(|i| ansi256_index_to_rgb(i as u8)), (r, g, b))
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    nearest_index(ANSI16_RGB.iter().copied(), (r, g, b))
}

fn nearest_index(palette: impl Iterator<Item = (u8, u8, u8)>, target: (u8, u8, u8)) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;
    for (index, candidate) in palette.enumerate() {
        let distance = color_distance_sq(target, candidate);
        if distance < best_distance {
            best_distance = distance;
            best_index = index as u8;
        }
    }
    best_index
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        return (
            level[(offset / 36) as usize],
            level[((offset / 6) % 6) as usize],
            level[(offset % 6) as usize],
        );
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
