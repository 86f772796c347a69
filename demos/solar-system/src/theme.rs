#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn background(self) -> u32 {
        match self {
            Theme::Dark => 0x000011,
            Theme::Light => 0x87ceeb,
        }
    }

    /// Stars only show against the dark sky.
    pub fn stars_visible(self) -> bool {
        self == Theme::Dark
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark_with_stars() {
        let theme = Theme::default();
        assert!(theme.is_dark());
        assert!(theme.stars_visible());
        assert_eq!(theme.background(), 0x000011);
    }

    #[test]
    fn toggle_flips_background_and_stars() {
        let light = Theme::default().toggled();
        assert_eq!(light, Theme::Light);
        assert_eq!(light.background(), 0x87ceeb);
        assert!(!light.stars_visible());
        assert_eq!(light.toggled(), Theme::Dark);
    }
}
