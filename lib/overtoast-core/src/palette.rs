use crate::request::Category;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// sRGB components in `0.0..=1.0`, as toolkits expect them.
    pub fn components(&self) -> (f64, f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a,
        )
    }
}

/// Deep navy, #0B1429.
pub const BACKGROUND: Rgba = Rgba::rgb(11, 20, 41);
pub const TEXT: Rgba = Rgba::rgb(255, 255, 255);

pub const ACCENT_INFO: Rgba = Rgba::rgb(37, 128, 255);
pub const ACCENT_WARNING: Rgba = Rgba::rgb(224, 117, 45);
pub const ACCENT_SUCCESS: Rgba = Rgba::rgb(51, 184, 120);
pub const ACCENT_ERROR: Rgba = Rgba::rgb(224, 63, 68);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    pub background: Rgba,
    pub accent: Rgba,
}

pub fn color_pair(category: Category) -> ColorPair {
    let accent = match category {
        Category::Info => ACCENT_INFO,
        Category::Warning => ACCENT_WARNING,
        Category::Success => ACCENT_SUCCESS,
        Category::Error => ACCENT_ERROR,
    };

    ColorPair {
        background: BACKGROUND,
        accent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accent_for(name: &str) -> Rgba {
        color_pair(Category::from_name(name)).accent
    }

    #[test]
    fn test_accent_table() {
        assert_eq!(accent_for("blue"), Rgba::rgb(37, 128, 255));
        assert_eq!(accent_for("yellow"), Rgba::rgb(224, 117, 45));
        assert_eq!(accent_for("green"), Rgba::rgb(51, 184, 120));
    }

    #[test]
    fn test_unknown_names_fall_back_to_error() {
        for name in ["", "red", "error", "BLUE", "grey", "green "] {
            assert_eq!(accent_for(name), ACCENT_ERROR, "{name:?}");
        }
    }

    #[test]
    fn test_background_is_fixed() {
        for category in [
            Category::Error,
            Category::Warning,
            Category::Success,
            Category::Info,
        ] {
            assert_eq!(color_pair(category).background, BACKGROUND);
        }
        assert_eq!(BACKGROUND.a, 1.0);
    }

    #[test]
    fn test_components() {
        let (r, g, b, a) = ACCENT_INFO.components();
        assert_eq!(r, 37.0 / 255.0);
        assert_eq!(g, 128.0 / 255.0);
        assert_eq!(b, 1.0);
        assert_eq!(a, 1.0);
    }
}
