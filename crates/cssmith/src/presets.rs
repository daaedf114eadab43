//! Static preset catalogs for the three generators, plus the gallery filter.
//!
//! Catalogs are read-only; applying a preset deep-copies its values into the
//! working state (with fresh identifiers) and keeps no live link back.

use css_backgrounds_borders::ShadowTemplate;
use css_images::{Gradient, GradientShape};
use css_transforms::TransformSettings;

/// A named color ramp for the gradient generator.
pub struct GradientPreset {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

/// The quick picks shown next to the gradient editor.
pub const QUICK_GRADIENTS: &[GradientPreset] = &[
    GradientPreset {
        name: "Ocean",
        colors: &["#2A7B9B", "#57C785", "#EDDD53"],
    },
    GradientPreset {
        name: "Sunset",
        colors: &["#FF6B6B", "#4ECDC4", "#45B7D1"],
    },
    GradientPreset {
        name: "Purple",
        colors: &["#667eea", "#764ba2"],
    },
    GradientPreset {
        name: "Green",
        colors: &["#11998e", "#38ef7d"],
    },
    GradientPreset {
        name: "Pink",
        colors: &["#ff9a9e", "#fecfef"],
    },
    GradientPreset {
        name: "Blue",
        colors: &["#a8edea", "#fed6e3"],
    },
];

/// Gallery grouping for the full gradient catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryCategory {
    Nature,
    Vibrant,
    Soft,
    Dark,
    Professional,
}

impl GalleryCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nature => "Nature",
            Self::Vibrant => "Vibrant",
            Self::Soft => "Soft",
            Self::Dark => "Dark",
            Self::Professional => "Professional",
        }
    }
}

/// One gallery entry: a named, categorized color ramp.
pub struct GalleryGradient {
    pub name: &'static str,
    pub colors: &'static [&'static str],
    pub category: GalleryCategory,
}

impl GalleryGradient {
    /// The CSS copied when this entry is picked — also the card preview: a
    /// 90° linear gradient over the evenly expanded color list.
    pub fn css(&self) -> String {
        let gradient = Gradient::from_colors(GradientShape::Linear, 90.0, self.colors);
        format!("background: {};", gradient.to_css())
    }
}

/// The full gradient gallery.
pub const GALLERY_GRADIENTS: &[GalleryGradient] = &[
    // Nature
    GalleryGradient {
        name: "Ocean",
        colors: &["#2A7B9B", "#57C785", "#EDDD53"],
        category: GalleryCategory::Nature,
    },
    GalleryGradient {
        name: "Sunset",
        colors: &["#FF6B6B", "#4ECDC4", "#45B7D1"],
        category: GalleryCategory::Nature,
    },
    GalleryGradient {
        name: "Forest",
        colors: &["#134E5E", "#71B280"],
        category: GalleryCategory::Nature,
    },
    GalleryGradient {
        name: "Mountain",
        colors: &["#8360c3", "#2ebf91"],
        category: GalleryCategory::Nature,
    },
    GalleryGradient {
        name: "Beach",
        colors: &["#74b9ff", "#0984e3", "#a29bfe"],
        category: GalleryCategory::Nature,
    },
    GalleryGradient {
        name: "Desert",
        colors: &["#f39c12", "#e74c3c", "#9b59b6"],
        category: GalleryCategory::Nature,
    },
    // Vibrant
    GalleryGradient {
        name: "Purple",
        colors: &["#667eea", "#764ba2"],
        category: GalleryCategory::Vibrant,
    },
    GalleryGradient {
        name: "Pink",
        colors: &["#ff9a9e", "#fecfef"],
        category: GalleryCategory::Vibrant,
    },
    GalleryGradient {
        name: "Rainbow",
        colors: &[
            "#ff0000", "#ff7f00", "#ffff00", "#00ff00", "#0000ff", "#4b0082", "#9400d3",
        ],
        category: GalleryCategory::Vibrant,
    },
    GalleryGradient {
        name: "Neon",
        colors: &["#00ffff", "#ff00ff", "#ffff00"],
        category: GalleryCategory::Vibrant,
    },
    GalleryGradient {
        name: "Fire",
        colors: &["#ff4757", "#ff6b7a", "#ffa502"],
        category: GalleryCategory::Vibrant,
    },
    GalleryGradient {
        name: "Electric",
        colors: &["#667eea", "#764ba2", "#f093fb"],
        category: GalleryCategory::Vibrant,
    },
    // Soft
    GalleryGradient {
        name: "Pastel",
        colors: &["#a8edea", "#fed6e3"],
        category: GalleryCategory::Soft,
    },
    GalleryGradient {
        name: "Mint",
        colors: &["#d299c2", "#fef9d7"],
        category: GalleryCategory::Soft,
    },
    GalleryGradient {
        name: "Lavender",
        colors: &["#e0c3fc", "#9bb5ff"],
        category: GalleryCategory::Soft,
    },
    GalleryGradient {
        name: "Peach",
        colors: &["#ffb7b7", "#ffd3a5"],
        category: GalleryCategory::Soft,
    },
    GalleryGradient {
        name: "Cloud",
        colors: &["#ffffff", "#e3f2fd", "#bbdefb"],
        category: GalleryCategory::Soft,
    },
    GalleryGradient {
        name: "Rose",
        colors: &["#ffecd2", "#fcb69f"],
        category: GalleryCategory::Soft,
    },
    // Dark
    GalleryGradient {
        name: "Midnight",
        colors: &["#232526", "#414345"],
        category: GalleryCategory::Dark,
    },
    GalleryGradient {
        name: "Galaxy",
        colors: &["#1e3c72", "#2a5298"],
        category: GalleryCategory::Dark,
    },
    GalleryGradient {
        name: "Carbon",
        colors: &["#0f0f0f", "#2d2d2d"],
        category: GalleryCategory::Dark,
    },
    GalleryGradient {
        name: "Steel",
        colors: &["#41295a", "#2F0743"],
        category: GalleryCategory::Dark,
    },
    GalleryGradient {
        name: "Shadow",
        colors: &["#000000", "#434343"],
        category: GalleryCategory::Dark,
    },
    GalleryGradient {
        name: "Deep Sea",
        colors: &["#00416A", "#799F0C"],
        category: GalleryCategory::Dark,
    },
    // Professional
    GalleryGradient {
        name: "Corporate",
        colors: &["#3b82f6", "#1e40af"],
        category: GalleryCategory::Professional,
    },
    GalleryGradient {
        name: "Modern",
        colors: &["#6366f1", "#8b5cf6"],
        category: GalleryCategory::Professional,
    },
    GalleryGradient {
        name: "Elegant",
        colors: &["#1f2937", "#4b5563"],
        category: GalleryCategory::Professional,
    },
    GalleryGradient {
        name: "Clean",
        colors: &["#f8fafc", "#e2e8f0"],
        category: GalleryCategory::Professional,
    },
    GalleryGradient {
        name: "Sophisticated",
        colors: &["#374151", "#6b7280"],
        category: GalleryCategory::Professional,
    },
    GalleryGradient {
        name: "Minimal",
        colors: &["#f9fafb", "#f3f4f6"],
        category: GalleryCategory::Professional,
    },
];

/// Filter the gallery by an optional category and a case-insensitive name
/// substring. An empty search matches everything.
pub fn filter_gallery(
    category: Option<GalleryCategory>,
    search: &str,
) -> Vec<&'static GalleryGradient> {
    let needle = search.to_lowercase();
    GALLERY_GRADIENTS
        .iter()
        .filter(|preset| {
            category.is_none_or(|wanted| preset.category == wanted)
                && preset.name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// A named shadow-layer bundle.
pub struct ShadowPreset {
    pub name: &'static str,
    pub layers: &'static [ShadowTemplate],
}

pub const SHADOW_PRESETS: &[ShadowPreset] = &[
    ShadowPreset {
        name: "Subtle",
        layers: &[ShadowTemplate {
            offset_x: 0.0,
            offset_y: 1.0,
            blur: 3.0,
            spread: 0.0,
            color: "#00000010",
            inset: false,
        }],
    },
    ShadowPreset {
        name: "Medium",
        layers: &[ShadowTemplate {
            offset_x: 0.0,
            offset_y: 4.0,
            blur: 6.0,
            spread: -1.0,
            color: "#00000025",
            inset: false,
        }],
    },
    ShadowPreset {
        name: "Large",
        layers: &[ShadowTemplate {
            offset_x: 0.0,
            offset_y: 10.0,
            blur: 15.0,
            spread: -3.0,
            color: "#00000035",
            inset: false,
        }],
    },
    ShadowPreset {
        name: "Colored",
        layers: &[ShadowTemplate {
            offset_x: 0.0,
            offset_y: 4.0,
            blur: 14.0,
            spread: 0.0,
            color: "#3b82f650",
            inset: false,
        }],
    },
    ShadowPreset {
        name: "Inset",
        layers: &[ShadowTemplate {
            offset_x: 0.0,
            offset_y: 2.0,
            blur: 4.0,
            spread: 0.0,
            color: "#00000020",
            inset: true,
        }],
    },
];

/// A named transform-settings bundle.
pub struct TransformPreset {
    pub name: &'static str,
    pub settings: TransformSettings,
}

pub const TRANSFORM_PRESETS: &[TransformPreset] = &[
    TransformPreset {
        name: "Rotation 3D",
        settings: TransformSettings {
            rotate_x: 15.0,
            rotate_y: 25.0,
            ..TransformSettings::IDENTITY
        },
    },
    TransformPreset {
        name: "Scale Up",
        settings: TransformSettings {
            scale_x: 1.2,
            scale_y: 1.2,
            ..TransformSettings::IDENTITY
        },
    },
    TransformPreset {
        name: "Skew Card",
        settings: TransformSettings {
            skew_x: 5.0,
            skew_y: 2.0,
            ..TransformSettings::IDENTITY
        },
    },
    TransformPreset {
        name: "Perspective",
        settings: TransformSettings {
            translate_y: -20.0,
            rotate_x: 45.0,
            perspective: 500.0,
            ..TransformSettings::IDENTITY
        },
    },
    TransformPreset {
        name: "Flip",
        settings: TransformSettings {
            rotate_y: 180.0,
            ..TransformSettings::IDENTITY
        },
    },
];
