//! CSS Backgrounds and Borders Module Level 3 — drop shadows.
//! Spec: <https://www.w3.org/TR/css-backgrounds-3/>

#![forbid(unsafe_code)]

// The box-shadow property is §7 of the Backgrounds 3 spec.
pub mod chapter_7_box_shadow;

pub use chapter_7_box_shadow::{
    DEFAULT_LAYER, LayerId, LayerPatch, ShadowLayer, ShadowStack, ShadowTemplate,
};
