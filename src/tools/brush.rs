use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::config::BrushSizes;

/// Entries of the brush size chooser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushSize {
    Small,
    Medium,
    Large,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Small, BrushSize::Medium, BrushSize::Large];

    pub fn width(self, sizes: &BrushSizes) -> f32 {
        match self {
            Self::Small => sizes.small,
            Self::Medium => sizes.medium,
            Self::Large => sizes.large,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

/// Brush configuration shared by every gesture until changed.
///
/// `width` is in logical units; it is scaled to surface pixels when a
/// gesture takes its [`Paint`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSettings {
    pub width: f32,
    pub color: Color32,
    pub erase: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            width: 12.0,
            color: Color32::BLACK,
            erase: false,
        }
    }
}

impl BrushSettings {
    pub fn with_width(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Snapshot used for one gesture, with the width in surface pixels
    pub fn paint(&self, pixels_per_point: f32) -> Paint {
        Paint {
            width: (self.width * pixels_per_point).max(1.0),
            color: self.color,
            erase: self.erase,
        }
    }
}

/// Paint captured when a gesture starts. Later changes to
/// [`BrushSettings`] never reach a stroke that already holds one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub width: f32,
    pub color: Color32,
    pub erase: bool,
}
