//! CSS Images Module Level 3 — gradient `<image>` values.
//! Spec: <https://www.w3.org/TR/css-images-3/#gradients>

#![forbid(unsafe_code)]

// Gradients are §3 of the Images 3 spec; everything this crate models lives
// in that chapter.
pub mod chapter_3_gradients;

pub use chapter_3_gradients::{ColorStop, Gradient, GradientShape, StopId, StopPatch};
