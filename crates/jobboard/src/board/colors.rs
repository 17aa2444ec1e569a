//! Fixed display colors for status and priority.

use serde::Serialize;

use crate::model::{Priority, Status};

/// Terminal-friendly color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hue {
    DarkRed,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

/// A display color: the web class it was designed against plus the closest
/// terminal hue and its RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Swatch {
    pub class: &'static str,
    pub hue: Hue,
    pub rgb: (u8, u8, u8),
}

const fn swatch(class: &'static str, hue: Hue, rgb: (u8, u8, u8)) -> Swatch {
    Swatch { class, hue, rgb }
}

pub fn status_color(status: Status) -> Swatch {
    match status {
        Status::NotStarted => swatch("bg-red-600", Hue::Red, (220, 38, 38)),
        Status::InProgress => swatch("bg-yellow-500", Hue::Yellow, (234, 179, 8)),
        Status::Completed => swatch("bg-green-600", Hue::Green, (22, 163, 74)),
    }
}

pub fn priority_color(priority: Priority) -> Swatch {
    match priority {
        Priority::UltraHigh => swatch("bg-red-800", Hue::DarkRed, (153, 27, 27)),
        Priority::VeryHigh => swatch("bg-red-600", Hue::Red, (220, 38, 38)),
        Priority::High => swatch("bg-orange-500", Hue::Orange, (249, 115, 22)),
        Priority::Moderate => swatch("bg-yellow-400", Hue::Yellow, (250, 204, 21)),
        Priority::Low => swatch("bg-green-500", Hue::Green, (34, 197, 94)),
        Priority::NotSpecified => swatch("bg-blue-500", Hue::Blue, (59, 130, 246)),
    }
}
