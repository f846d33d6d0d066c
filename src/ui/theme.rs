use ratatui::style::Color;

use crate::cli::ColorArg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub border: Color,
    pub info: Color,
    pub danger: Color,
    pub particle: Color,
    pub wave: Color,
    pub loader_ray: Color,
}

impl Default for Theme {
    fn default() -> Self {
        theme_for(ColorCapability::TrueColor)
    }
}

#[must_use]
pub fn theme_for(capability: ColorCapability) -> Theme {
    match capability {
        ColorCapability::TrueColor => Theme {
            background: Color::Rgb(12, 16, 36),
            surface: Color::Rgb(24, 30, 58),
            accent: Color::Rgb(255, 107, 53),
            text: Color::Rgb(236, 240, 248),
            muted_text: Color::Rgb(150, 160, 186),
            border: Color::Rgb(88, 101, 140),
            info: Color::Rgb(120, 200, 255),
            danger: Color::Rgb(255, 99, 99),
            particle: Color::Rgb(255, 255, 255),
            wave: Color::Rgb(52, 78, 140),
            loader_ray: Color::Rgb(255, 170, 90),
        },
        ColorCapability::Xterm256 => Theme {
            background: Color::Indexed(234),
            surface: Color::Indexed(236),
            accent: Color::Indexed(202),
            text: Color::Indexed(255),
            muted_text: Color::Indexed(248),
            border: Color::Indexed(61),
            info: Color::Indexed(117),
            danger: Color::Indexed(203),
            particle: Color::Indexed(231),
            wave: Color::Indexed(24),
            loader_ray: Color::Indexed(215),
        },
        ColorCapability::Basic16 => Theme {
            background: Color::Reset,
            surface: Color::Reset,
            accent: Color::LightRed,
            text: Color::White,
            muted_text: Color::Gray,
            border: Color::DarkGray,
            info: Color::LightCyan,
            danger: Color::Red,
            particle: Color::White,
            wave: Color::Blue,
            loader_ray: Color::Yellow,
        },
    }
}

pub fn detect_color_capability(mode: ColorArg) -> ColorCapability {
    let term = std::env::var("TERM").ok();
    let colorterm = std::env::var("COLORTERM").ok();
    let no_color = std::env::var("NO_COLOR").ok();
    detect_color_capability_from(
        mode,
        term.as_deref(),
        colorterm.as_deref(),
        no_color.as_deref(),
    )
}

pub(crate) fn detect_color_capability_from(
    mode: ColorArg,
    term: Option<&str>,
    colorterm: Option<&str>,
    no_color: Option<&str>,
) -> ColorCapability {
    if should_force_basic16(mode, term, no_color) {
        return ColorCapability::Basic16;
    }
    if mode == ColorArg::Always || supports_truecolor(colorterm, term) {
        return ColorCapability::TrueColor;
    }
    if supports_256_color(term) {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

fn should_force_basic16(mode: ColorArg, term: Option<&str>, no_color: Option<&str>) -> bool {
    mode == ColorArg::Never
        || (mode == ColorArg::Auto && no_color.is_some_and(|value| !value.is_empty()))
        || (mode == ColorArg::Auto && term.is_some_and(|value| value.eq_ignore_ascii_case("dumb")))
}

fn supports_truecolor(colorterm: Option<&str>, term: Option<&str>) -> bool {
    let colorterm = colorterm.unwrap_or_default().to_lowercase();
    let term = term.unwrap_or_default().to_lowercase();
    truecolor_hint(&colorterm) || truecolor_hint(&term)
}

fn truecolor_hint(value: &str) -> bool {
    value.contains("truecolor") || value.contains("24bit") || value.ends_with("direct")
}

fn supports_256_color(term: Option<&str>) -> bool {
    term.unwrap_or_default().to_lowercase().contains("256color")
}
