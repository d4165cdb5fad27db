use serde::{
    Deserialize,
    Serialize,
};

/// ARGB color as carried on the wire and handed to Presenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { a: 255, r, g, b }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color { a, r, g, b }
    }

    /// Parses `RRGGBB` or `AARRGGBB`, with an optional leading `#`.
    pub fn parse(hex: &str) -> Option<Color> {
        let hex = hex.trim().trim_start_matches('#');

        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();

        match hex.len() {
            6 => Some(Color::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Some(Color::argb(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
            _ => None,
        }
    }

    /// Parse with the documented fallback: malformed strings become white.
    pub fn parse_or_white(hex: &str) -> Color {
        match Color::parse(hex) {
            Some(color) => color,
            None => {
                println!("[Config] Unparseable color {:?}, falling back to white", hex);
                Color::WHITE
            }
        }
    }
}

/// Carousel card background presets, index-addressed by `styleIndex`.
pub const CAROUSEL_STYLES: [Color; 6] = [
    Color::rgb(91, 108, 255), // blue-violet
    Color::rgb(46, 125, 50),  // deep green
    Color::rgb(233, 30, 99),  // pink
    Color::rgb(0, 188, 212),  // cyan
    Color::rgb(255, 152, 0),  // orange
    Color::rgb(156, 39, 176), // purple
];

/// Anchor for the carousel card and the danmu example panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    TopCenter,
    BottomCenter,
}

impl LayoutPosition {
    pub fn from_wire(value: &str) -> Option<LayoutPosition> {
        match value {
            "top-left" => Some(LayoutPosition::TopLeft),
            "top-right" => Some(LayoutPosition::TopRight),
            "bottom-left" => Some(LayoutPosition::BottomLeft),
            "bottom-right" => Some(LayoutPosition::BottomRight),
            "top-center" => Some(LayoutPosition::TopCenter),
            "bottom-center" => Some(LayoutPosition::BottomCenter),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            LayoutPosition::TopLeft => "top-left",
            LayoutPosition::TopRight => "top-right",
            LayoutPosition::BottomLeft => "bottom-left",
            LayoutPosition::BottomRight => "bottom-right",
            LayoutPosition::TopCenter => "top-center",
            LayoutPosition::BottomCenter => "bottom-center",
        }
    }
}

/// Current presentation parameters for one overlay session.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    pub interval_seconds: f64,
    pub area_top_percent: f64,
    pub area_height_percent: f64,
    pub speed: f64,
    pub font_size: f64,
    pub show_translation: bool,
    pub opacity: f64,
    pub word_color: Color,
    pub translation_color: Color,
    pub background_color: Color,
    pub style_index: usize,
    pub layout_position: LayoutPosition,
    pub example_position: LayoutPosition,
    pub example_offset_y: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            interval_seconds: 5.0,
            area_top_percent: 5.0,
            area_height_percent: 60.0,
            speed: 0.6,
            font_size: 20.0,
            show_translation: true,
            opacity: 0.85,
            word_color: Color::WHITE,
            translation_color: Color::rgb(255, 215, 0),
            background_color: Color::rgb(91, 108, 255),
            style_index: 0,
            layout_position: LayoutPosition::BottomRight,
            example_position: LayoutPosition::BottomCenter,
            example_offset_y: 80.0,
        }
    }
}

/// Partial config update as received over the wire. Absent fields keep
/// their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigPatch {
    pub interval: Option<f64>,
    #[serde(rename = "areaTop")]
    pub area_top: Option<f64>,
    #[serde(rename = "areaHeight")]
    pub area_height: Option<f64>,
    pub speed: Option<f64>,
    #[serde(rename = "fontSize")]
    pub font_size: Option<f64>,
    #[serde(rename = "showTranslation")]
    pub show_translation: Option<bool>,
    pub opacity: Option<f64>,
    #[serde(rename = "wordColor")]
    pub word_color: Option<String>,
    #[serde(rename = "transColor")]
    pub translation_color: Option<String>,
    #[serde(rename = "bgColor")]
    pub background_color: Option<String>,
    #[serde(rename = "styleIndex")]
    pub style_index: Option<i64>,
    pub position: Option<String>,
    #[serde(rename = "examplePosition")]
    pub example_position: Option<String>,
    #[serde(rename = "exampleOffsetY")]
    pub example_offset_y: Option<f64>,
}

impl OverlayConfig {
    /// Merges a patch field-by-field. Out-of-range values are logged and
    /// skipped; the remaining fields of the same patch still apply.
    pub fn apply(&mut self, patch: &ConfigPatch) {
        if let Some(interval) = patch.interval {
            if interval >= 1.0 {
                self.interval_seconds = interval;
            } else {
                println!("[Config] Rejected interval {} (must be >= 1s)", interval);
            }
        }

        if let Some(area_top) = patch.area_top {
            if (0.0..=100.0).contains(&area_top) {
                self.area_top_percent = area_top;
            } else {
                println!("[Config] Rejected areaTop {} (percent out of range)", area_top);
            }
        }

        if let Some(area_height) = patch.area_height {
            if (0.0..=100.0).contains(&area_height) {
                self.area_height_percent = area_height;
            } else {
                println!("[Config] Rejected areaHeight {} (percent out of range)", area_height);
            }
        }

        if let Some(speed) = patch.speed {
            if speed > 0.0 {
                self.speed = speed;
            } else {
                println!("[Config] Rejected speed {} (must be positive)", speed);
            }
        }

        if let Some(font_size) = patch.font_size {
            if font_size > 0.0 {
                self.font_size = font_size;
            } else {
                println!("[Config] Rejected fontSize {} (must be positive)", font_size);
            }
        }

        if let Some(show_translation) = patch.show_translation {
            self.show_translation = show_translation;
        }

        if let Some(opacity) = patch.opacity {
            if (0.0..=1.0).contains(&opacity) {
                self.opacity = opacity;
            } else {
                println!("[Config] Rejected opacity {} (must be within [0,1])", opacity);
            }
        }

        if let Some(ref word_color) = patch.word_color {
            self.word_color = Color::parse_or_white(word_color);
        }

        if let Some(ref translation_color) = patch.translation_color {
            self.translation_color = Color::parse_or_white(translation_color);
        }

        if let Some(ref background_color) = patch.background_color {
            self.background_color = Color::parse_or_white(background_color);
        }

        if let Some(style_index) = patch.style_index {
            if (0..CAROUSEL_STYLES.len() as i64).contains(&style_index) {
                self.style_index = style_index as usize;
                self.background_color = CAROUSEL_STYLES[self.style_index];
            } else {
                println!("[Config] Rejected styleIndex {} (no such preset)", style_index);
            }
        }

        if let Some(ref position) = patch.position {
            match LayoutPosition::from_wire(position) {
                Some(parsed) => self.layout_position = parsed,
                None => println!("[Config] Rejected position {:?}", position),
            }
        }

        if let Some(ref example_position) = patch.example_position {
            match LayoutPosition::from_wire(example_position) {
                Some(parsed) => self.example_position = parsed,
                None => println!("[Config] Rejected examplePosition {:?}", example_position),
            }
        }

        if let Some(example_offset_y) = patch.example_offset_y {
            self.example_offset_y = example_offset_y;
        }
    }
}
