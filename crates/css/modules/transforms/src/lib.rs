//! CSS Transforms Modules Level 1 & 2 — the `transform` property family.
//! Spec: <https://www.w3.org/TR/css-transforms-1/>
//! Spec: <https://www.w3.org/TR/css-transforms-2/>

#![forbid(unsafe_code)]
#![allow(
    clippy::float_cmp,
    reason = "clause elision is defined on exact default values"
)]

use core::fmt;

pub mod transform_list;

/// Default `perspective` distance in pixels; the declaration is elided at
/// exactly this value.
pub const DEFAULT_PERSPECTIVE: f32 = 1000.0;

/// The `transform-origin` keyword grid (center, edges, corners).
///
/// Spec: <https://www.w3.org/TR/css-transforms-1/#transform-origin-property>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformOrigin {
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl TransformOrigin {
    /// The CSS keyword form, a single keyword or a space-separated pair.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top left",
            Self::TopRight => "top right",
            Self::BottomLeft => "bottom left",
            Self::BottomRight => "bottom right",
        }
    }
}

impl fmt::Display for TransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Flat record of independent transform parameters.
///
/// Every field is independently mutable; there are no ordering relationships
/// between them. Serialization (see [`transform_list`]) emits function
/// clauses in a fixed order and elides identity values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformSettings {
    pub translate_x: f32,
    pub translate_y: f32,
    pub translate_z: f32,
    /// Degrees.
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub rotate_z: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_z: f32,
    /// Degrees.
    pub skew_x: f32,
    pub skew_y: f32,
    pub perspective: f32,
    pub origin: TransformOrigin,
}

impl TransformSettings {
    /// The identity record: no translation/rotation/skew, unit scale,
    /// default perspective, centered origin. Serializes to nothing.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        translate_z: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        rotate_z: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        scale_z: 1.0,
        skew_x: 0.0,
        skew_y: 0.0,
        perspective: DEFAULT_PERSPECTIVE,
        origin: TransformOrigin::Center,
    };

    /// Whether a preview container must establish a 3D rendering context
    /// (`transform-style: preserve-3d` plus an active `perspective`): any
    /// rotation set, or a non-default perspective.
    ///
    /// Spec: <https://www.w3.org/TR/css-transforms-2/#transform-style-property>
    pub fn needs_3d_context(&self) -> bool {
        self.rotate_x != 0.0
            || self.rotate_y != 0.0
            || self.rotate_z != 0.0
            || self.perspective != DEFAULT_PERSPECTIVE
    }
}

impl Default for TransformSettings {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}
