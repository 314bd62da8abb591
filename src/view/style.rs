#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Fixed color set for one theme. Translucent values from the web palette
/// are carried without their alpha; terminals don't composite.
pub struct Palette {
    pub board_bg: Rgb,
    pub cell_bg: Rgb,
    pub cell_text: Rgb,
    pub cell_border: Rgb,
    pub blocked_bg: Rgb,
    pub blocked_border: Rgb,
    pub highlight_bg: Rgb,
    pub completed_bg: Rgb,
    pub label: Rgb,
}

static LIGHT: Palette = Palette {
    board_bg: Rgb(255, 255, 255),
    cell_bg: Rgb(255, 255, 255),
    cell_text: Rgb(0, 0, 0),
    cell_border: Rgb(85, 85, 85),
    blocked_bg: Rgb(85, 85, 85),
    blocked_border: Rgb(85, 85, 85),
    highlight_bg: Rgb(255, 250, 144),
    completed_bg: Rgb(76, 175, 80),
    label: Rgb(0, 0, 0),
};

static DARK: Palette = Palette {
    board_bg: Rgb(0, 0, 0),
    cell_bg: Rgb(51, 51, 51),
    cell_text: Rgb(255, 255, 255),
    cell_border: Rgb(170, 170, 170),
    blocked_bg: Rgb(0, 0, 0),
    blocked_border: Rgb(68, 68, 68),
    highlight_bg: Rgb(255, 193, 7),
    completed_bg: Rgb(76, 175, 80),
    label: Rgb(255, 255, 255),
};

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Fill priority: highlighted > completed > theme default.
pub fn cell_fill(palette: &Palette, highlighted: bool, completed: bool) -> Rgb {
    if highlighted {
        palette.highlight_bg
    } else if completed {
        palette.completed_bg
    } else {
        palette.cell_bg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_wins_over_completed() {
        let palette = Theme::Light.palette();
        assert_eq!(cell_fill(palette, true, true), palette.highlight_bg);
        assert_eq!(cell_fill(palette, false, true), palette.completed_bg);
        assert_eq!(cell_fill(palette, false, false), palette.cell_bg);
    }

    #[test]
    fn themes_use_distinct_cell_colors() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_ne!(light.cell_bg, dark.cell_bg);
        assert_ne!(light.cell_text, dark.cell_text);
        assert_eq!(light.completed_bg, dark.completed_bg);
    }
}
