//! Default start-box layouts
//!
//! Maps with a known good team split get their own pair of boxes; every other
//! map falls back to [`BoxLayout::NorthVsSouth`].

use crate::types::StartBox;

/// Named two-team layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxLayout {
    NorthVsSouth,
    EastVsWest,
    NortheastVsSouthwest,
    NorthwestVsSoutheast,
}

impl BoxLayout {
    pub fn all() -> [BoxLayout; 4] {
        [
            BoxLayout::NorthVsSouth,
            BoxLayout::EastVsWest,
            BoxLayout::NortheastVsSouthwest,
            BoxLayout::NorthwestVsSoutheast,
        ]
    }

    pub fn boxes(self) -> [StartBox; 2] {
        match self {
            BoxLayout::NorthVsSouth => [
                StartBox::new(0.0, 0.0, 1.0, 0.3),
                StartBox::new(0.0, 0.7, 1.0, 0.3),
            ],
            BoxLayout::EastVsWest => [
                StartBox::new(0.0, 0.0, 0.3, 1.0),
                StartBox::new(0.7, 0.0, 0.3, 1.0),
            ],
            BoxLayout::NortheastVsSouthwest => [
                StartBox::new(0.7, 0.0, 0.3, 0.3),
                StartBox::new(0.0, 0.7, 0.3, 0.3),
            ],
            BoxLayout::NorthwestVsSoutheast => [
                StartBox::new(0.0, 0.0, 0.3, 0.3),
                StartBox::new(0.7, 0.7, 0.3, 0.3),
            ],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BoxLayout::NorthVsSouth => "NorthVsSouth",
            BoxLayout::EastVsWest => "EastVsWest",
            BoxLayout::NortheastVsSouthwest => "NortheastVsSouthwest",
            BoxLayout::NorthwestVsSoutheast => "NorthwestVsSoutheast",
        }
    }
}

/// Map-specific boxes, `None` for maps without an entry
pub fn default_map_boxes(script_name: &str) -> Option<[StartBox; 2]> {
    let boxes = match script_name {
        "Red Comet Remake 1.8" => [
            StartBox::new(0.0, 0.0, 0.25, 1.0),
            StartBox::new(0.75, 0.0, 0.25, 1.0),
        ],
        "Altair Crossing V4.1" => [
            StartBox::new(0.0, 0.0, 1.0, 0.22),
            StartBox::new(0.0, 0.78, 1.0, 0.22),
        ],
        "Throne v8" => [
            StartBox::new(0.0, 0.0, 0.35, 0.35),
            StartBox::new(0.65, 0.65, 0.35, 0.35),
        ],
        "Isthmus v1.0" => [
            StartBox::new(0.0, 0.0, 0.32, 1.0),
            StartBox::new(0.68, 0.0, 0.32, 1.0),
        ],
        "Quicksilver Remake 1.24" => BoxLayout::NortheastVsSouthwest.boxes(),
        "Supreme Isthmus v1.6.4" => BoxLayout::NorthwestVsSoutheast.boxes(),
        _ => return None,
    };
    Some(boxes)
}

/// Boxes to install when switching to a map
pub fn start_boxes_for_map(script_name: &str) -> [StartBox; 2] {
    default_map_boxes(script_name).unwrap_or_else(|| BoxLayout::NorthVsSouth.boxes())
}
