use crate::render::{Color, Point, SurfaceSize};
use std::path::PathBuf;

const DEFAULT_USER_AGENT: &str = "sos-icon/0.1 (+https://github.com/google/fonts)";
const DEFAULT_FONT_URL: &str =
    "https://github.com/google/fonts/raw/main/ofl/nanumgothic/NanumGothic-Bold.ttf";

/// Where the label font comes from and where it is kept.
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Remote location of the font file
    pub url: String,
    /// Local path the font is cached at
    pub path: PathBuf,
    /// System families tried (in order) when the cached font cannot be used
    pub system_families: Vec<String>,
}

/// Shield silhouette drawn behind the labels.
#[derive(Debug, Clone)]
pub struct ShieldStyle {
    pub points: Vec<Point>,
    pub fill: Color,
    pub outline: Color,
    pub stroke_width: f32,
}

/// A single line of text, center-anchored at `(x, y)`.
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    /// Em size in pixels
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

/// Everything the icon generator needs. All values are fixed; `Default` is the icon.
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// User agent string for the font download
    pub user_agent: String,
    pub font: FontConfig,
    pub canvas: SurfaceSize,
    pub shield: ShieldStyle,
    pub text_color: Color,
    pub title: Label,
    pub subtitle: Label,
    /// Output file, always overwritten
    pub output_path: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            font: FontConfig {
                url: DEFAULT_FONT_URL.to_string(),
                path: PathBuf::from("NanumGothic-Bold.ttf"),
                system_families: vec![
                    "NanumGothic".to_string(),
                    "Noto Sans CJK KR".to_string(),
                    "Apple SD Gothic Neo".to_string(),
                    "Malgun Gothic".to_string(),
                ],
            },
            canvas: SurfaceSize { width: 128, height: 128 },
            shield: ShieldStyle {
                points: vec![
                    Point::new(10.0, 10.0),
                    Point::new(118.0, 10.0),
                    Point::new(118.0, 50.0),
                    Point::new(64.0, 118.0),
                    Point::new(10.0, 50.0),
                ],
                fill: Color::from_u8(20, 30, 60, 255),      // dark navy
                outline: Color::from_u8(0, 255, 65, 255),   // neon green
                stroke_width: 2.0,
            },
            text_color: Color::from_u8(255, 255, 255, 255),
            title: Label {
                text: "SOS".to_string(),
                size: 48.0,
                x: 64.0,
                y: 50.0,
            },
            subtitle: Label {
                text: "남편응급실".to_string(),
                size: 16.0,
                x: 64.0,
                y: 85.0,
            },
            output_path: PathBuf::from("public/icon-128.png"),
        }
    }
}
