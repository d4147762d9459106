use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct ThemePalette {
    pub name: &'static str,
    pub accent_primary: Color,
    pub accent_comments: Color,
    pub accent_pending: Color,
    pub bg_app: Color,
    pub bg_panel: Color,
    pub bg_drawer: Color,
    pub bg_selected: Color,
    pub bg_input: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub border_panel: Color,
    pub border_focus: Color,
}

pub const THEMES: [ThemePalette; 3] = [
    ThemePalette {
        name: "dark",
        accent_primary: Color::Rgb(91, 157, 255),
        accent_comments: Color::Rgb(74, 222, 128),
        accent_pending: Color::Rgb(250, 204, 21),
        bg_app: Color::Rgb(9, 13, 20),
        bg_panel: Color::Rgb(15, 20, 31),
        bg_drawer: Color::Rgb(20, 27, 40),
        bg_selected: Color::Rgb(28, 42, 71),
        bg_input: Color::Rgb(24, 33, 52),
        text_primary: Color::Rgb(226, 234, 250),
        text_muted: Color::Rgb(124, 138, 175),
        border_panel: Color::Rgb(39, 57, 98),
        border_focus: Color::Rgb(115, 156, 255),
    },
    ThemePalette {
        name: "light",
        accent_primary: Color::Rgb(25, 99, 210),
        accent_comments: Color::Rgb(22, 128, 61),
        accent_pending: Color::Rgb(180, 120, 0),
        bg_app: Color::Rgb(246, 248, 250),
        bg_panel: Color::Rgb(255, 255, 255),
        bg_drawer: Color::Rgb(240, 243, 247),
        bg_selected: Color::Rgb(218, 230, 250),
        bg_input: Color::Rgb(232, 237, 245),
        text_primary: Color::Rgb(31, 35, 40),
        text_muted: Color::Rgb(101, 109, 118),
        border_panel: Color::Rgb(208, 215, 222),
        border_focus: Color::Rgb(9, 105, 218),
    },
    ThemePalette {
        name: "contrast",
        accent_primary: Color::Cyan,
        accent_comments: Color::LightGreen,
        accent_pending: Color::Yellow,
        bg_app: Color::Black,
        bg_panel: Color::Black,
        bg_drawer: Color::Black,
        bg_selected: Color::DarkGray,
        bg_input: Color::Black,
        text_primary: Color::White,
        text_muted: Color::Gray,
        border_panel: Color::Gray,
        border_focus: Color::White,
    },
];

pub fn resolve_theme(name: Option<&str>) -> &'static ThemePalette {
    if let Some(name) = name
        && let Some(theme) = THEMES
            .iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
    {
        return theme;
    }
    default_theme()
}

pub fn default_theme() -> &'static ThemePalette {
    &THEMES[0]
}
