//! cssmith — interactive CSS declaration generation.
//!
//! The typed parameter models and their serializers live in the `css_*`
//! module crates (gradients in `css_images`, box-shadow in
//! `css_backgrounds_borders`, transform chains in `css_transforms`, color
//! helpers in `css_color`). This crate layers the working editors, the
//! preset catalogs, the output formats, and the clipboard/notification
//! seams on top, and re-exports the whole toolkit.

#![forbid(unsafe_code)]

pub mod clipboard;
pub mod editor;
pub mod notify;
pub mod output;
pub mod presets;
pub mod preview;

pub use css_backgrounds_borders::{
    DEFAULT_LAYER, LayerId, LayerPatch, ShadowLayer, ShadowStack, ShadowTemplate,
};
pub use css_color::hex_to_rgba;
pub use css_images::{ColorStop, Gradient, GradientShape, StopId, StopPatch};
pub use css_transforms::{DEFAULT_PERSPECTIVE, TransformOrigin, TransformSettings};

pub use crate::clipboard::{Clipboard, copy_output, copy_output_detached};
pub use crate::editor::{GradientEditor, ShadowEditor, TransformEditor};
pub use crate::notify::{LogNotifier, Notifier, Toast};
pub use crate::output::OutputFormat;
