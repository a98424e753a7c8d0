//! Named board theme presets for the rendering collaborator.
//!
//! Pure presentation data: colors, texture paths, and geometry handed to the
//! board renderer unmodified. Nothing in the engine reads these fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Textures {
    pub black: String,
    pub white: String,
    pub shadow: String,
    pub board: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub normal: f32,
    pub clipped: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardShadow {
    pub color: String,
    pub blur: f32,
    pub off_x: f32,
    pub off_y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub color: String,
    pub line_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub color: String,
    pub x: f32,
    pub y: f32,
    pub smooth: f32,
    pub border_width: f32,
    pub line_width: f32,
}

/// Which board edges draw coordinate labels, and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub color: String,
    pub font: String,
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stone {
    pub radius: f32,
    pub dim_alpha: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowOffset {
    pub x_off: f32,
    pub y_off: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub line_width: f32,
    pub black_color: String,
    pub white_color: String,
    pub clear_color: String,
    pub font: String,
}

/// A complete board skin, selected by name and passed through to the
/// renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardTheme {
    pub textures: Option<Textures>,
    pub margin: Margin,
    pub board_shadow: BoardShadow,
    pub border: Border,
    pub padding: Margin,
    pub grid: Grid,
    pub star_radius: f32,
    pub coordinates: Coordinates,
    pub title_font: String,
    pub stone: Stone,
    pub shadow: ShadowOffset,
    pub mark: Mark,
}

impl BoardTheme {
    /// Light shinkaya wood, the default skin.
    pub fn shinkaya() -> Self {
        Self {
            textures: Some(Textures {
                black: "small/black.png".into(),
                white: "small/white.png".into(),
                shadow: "small/shadow.png".into(),
                board: "small/shinkaya.jpg".into(),
            }),
            margin: Margin {
                normal: 10.0,
                clipped: 10.0,
            },
            board_shadow: BoardShadow {
                color: "#ffe0a8".into(),
                blur: 7.5,
                off_x: 1.25,
                off_y: 1.25,
            },
            border: Border {
                color: "rgba(255, 255, 255, 0.3)".into(),
                line_width: 2.0,
            },
            padding: Margin {
                normal: 5.0,
                clipped: 2.5,
            },
            grid: Grid {
                color: "#202020".into(),
                x: 12.5,
                y: 12.5,
                smooth: 0.0,
                border_width: 1.2,
                line_width: 0.9,
            },
            star_radius: 2.5,
            coordinates: Coordinates {
                color: "#000000".into(),
                font: "normal 10px sans-serif".into(),
                top: true,
                bottom: true,
                left: true,
                right: true,
            },
            title_font: "bold 10px Freesans".into(),
            stone: Stone {
                radius: 6.0,
                dim_alpha: 0.6,
            },
            shadow: ShadowOffset {
                x_off: -1.0,
                y_off: 1.0,
            },
            mark: Mark {
                line_width: 1.0,
                black_color: "white".into(),
                white_color: "black".into(),
                clear_color: "black".into(),
                font: "bold 12px Freesans".into(),
            },
        }
    }

    /// Dark walnut wood.
    pub fn walnut() -> Self {
        let base = Self::shinkaya();
        Self {
            textures: base.textures.map(|t| Textures {
                board: "small/walnut.jpg".into(),
                shadow: "small/shadow_dark.png".into(),
                ..t
            }),
            board_shadow: BoardShadow {
                color: "#e2baa0".into(),
                ..base.board_shadow
            },
            grid: Grid {
                color: "#101010".into(),
                border_width: 1.4,
                line_width: 1.1,
                ..base.grid
            },
            ..Self::shinkaya()
        }
    }

    /// Textureless black-and-white diagram style.
    pub fn plain() -> Self {
        let base = Self::shinkaya();
        Self {
            textures: None,
            coordinates: Coordinates {
                top: false,
                bottom: true,
                left: true,
                right: false,
                ..base.coordinates
            },
            ..base
        }
    }

    /// Look up a preset by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "shinkaya" => Some(Self::shinkaya()),
            "walnut" => Some(Self::walnut()),
            "plain" => Some(Self::plain()),
            _ => None,
        }
    }
}
