use crate::facelets::{Color, Face};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which colour each face of a freshly built cube carries.
///
/// Loadable from TOML:
///
/// ```toml
/// top = "G"
/// left = "O"
/// front = "Y"
/// right = "R"
/// back = "W"
/// bottom = "B"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorScheme {
    pub top: Color,
    pub left: Color,
    pub front: Color,
    pub right: Color,
    pub back: Color,
    pub bottom: Color,
}

#[derive(Error, Debug)]
pub enum SchemeError {
    #[error("Invalid color scheme: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Color {0} is assigned to more than one face")]
    DuplicateColor(Color),
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            top: Color::Green,
            left: Color::Orange,
            front: Color::Yellow,
            right: Color::Red,
            back: Color::White,
            bottom: Color::Blue,
        }
    }
}

impl ColorScheme {
    #[must_use]
    pub const fn color_of(&self, face: Face) -> Color {
        match face {
            Face::Top => self.top,
            Face::Left => self.left,
            Face::Front => self.front,
            Face::Right => self.right,
            Face::Back => self.back,
            Face::Bottom => self.bottom,
        }
    }

    /// Check that the six faces use six different colours.
    ///
    /// # Errors
    ///
    /// Reports the first colour found on two faces.
    pub fn validate(&self) -> Result<(), SchemeError> {
        let mut seen = Vec::with_capacity(Face::ALL.len());
        for face in Face::ALL {
            let color = self.color_of(face);
            if seen.contains(&color) {
                return Err(SchemeError::DuplicateColor(color));
            }
            seen.push(color);
        }
        Ok(())
    }

    /// Parse and validate a scheme.
    ///
    /// # Errors
    ///
    /// If the TOML is malformed, names an unknown colour or field, or
    /// assigns a colour twice.
    pub fn from_toml_str(s: &str) -> Result<Self, SchemeError> {
        let scheme: ColorScheme = toml::from_str(s)?;
        scheme.validate()?;
        debug!("Loaded color scheme {scheme:?}");
        Ok(scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme_is_valid() {
        let scheme = ColorScheme::default();
        scheme.validate().unwrap();
        assert_eq!(scheme.color_of(Face::Front), Color::Yellow);
    }

    #[test]
    fn scheme_round_trips_through_toml() {
        let scheme = ColorScheme {
            top: Color::White,
            left: Color::Orange,
            front: Color::Green,
            right: Color::Red,
            back: Color::Blue,
            bottom: Color::Yellow,
        };
        let text = toml::to_string(&scheme).unwrap();
        assert!(text.contains("top = "));
        assert_eq!(ColorScheme::from_toml_str(&text).unwrap(), scheme);
    }

    #[test]
    fn lower_case_codes_are_accepted() {
        let scheme = ColorScheme::from_toml_str(
            "top = 'w'\nleft = 'o'\nfront = 'g'\nright = 'r'\nback = 'b'\nbottom = 'y'\n",
        )
        .unwrap();
        assert_eq!(scheme.top, Color::White);
    }

    #[test]
    fn duplicate_color_is_rejected() {
        let err = ColorScheme::from_toml_str(
            "top = 'W'\nleft = 'O'\nfront = 'G'\nright = 'R'\nback = 'B'\nbottom = 'W'\n",
        )
        .unwrap_err();
        assert!(matches!(err, SchemeError::DuplicateColor(Color::White)));
    }

    #[test]
    fn unknown_color_is_rejected() {
        let err = ColorScheme::from_toml_str(
            "top = 'P'\nleft = 'O'\nfront = 'G'\nright = 'R'\nback = 'B'\nbottom = 'W'\n",
        )
        .unwrap_err();
        assert!(matches!(err, SchemeError::Toml(_)));
    }
}
