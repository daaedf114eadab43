//! Working sessions: one editor per generator, seeded with the shipped
//! defaults.
//!
//! Each editor owns its parameter state exclusively; every mutation is a
//! direct synchronous call, and rendering stays a pure function of the
//! state. The clipboard write is the only operation that suspends.

use crate::clipboard::{Clipboard, copy_output};
use crate::notify::Notifier;
use crate::output::{OutputFormat, gradient_code, shadow_code, transform_code};
use crate::presets::{GalleryGradient, GradientPreset, ShadowPreset, TransformPreset};
use css_backgrounds_borders::ShadowStack;
use css_images::{Gradient, GradientShape};
use css_transforms::TransformSettings;

/// Seed ramp of the gradient editor (the Ocean colors at 0/50/100).
const SEED_COLORS: [&str; 3] = ["#2A7B9B", "#57C785", "#EDDD53"];

/// Gradient workspace: the editable gradient plus the selected output
/// format.
pub struct GradientEditor {
    pub gradient: Gradient,
    pub format: OutputFormat,
}

impl GradientEditor {
    pub fn new() -> Self {
        Self {
            gradient: Gradient::from_colors(GradientShape::Linear, 90.0, &SEED_COLORS),
            format: OutputFormat::Css,
        }
    }

    /// Overwrite the stops with a quick preset's expanded ramp.
    pub fn apply_preset(&mut self, preset: &GradientPreset) {
        self.gradient.apply_colors(preset.colors);
    }

    /// Overwrite the stops with a gallery entry's expanded ramp.
    pub fn apply_gallery_entry(&mut self, entry: &GalleryGradient) {
        self.gradient.apply_colors(entry.colors);
    }

    /// The code block shown and copied for the current state.
    pub fn output_code(&self) -> String {
        gradient_code(&self.gradient, self.format)
    }

    /// Copy the current code block; success raises a toast, failure is
    /// logged and swallowed.
    pub async fn copy<ClipboardImpl, NotifierImpl>(
        &self,
        clipboard: &ClipboardImpl,
        notifier: &NotifierImpl,
    ) where
        ClipboardImpl: Clipboard,
        NotifierImpl: Notifier,
    {
        copy_output(self.output_code(), self.format, clipboard, notifier).await;
    }
}

impl Default for GradientEditor {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Box-shadow workspace.
pub struct ShadowEditor {
    pub stack: ShadowStack,
    pub format: OutputFormat,
}

impl ShadowEditor {
    pub fn new() -> Self {
        Self {
            stack: ShadowStack::new(),
            format: OutputFormat::Css,
        }
    }

    /// Overwrite the layers with deep copies of a preset's bundle.
    pub fn apply_preset(&mut self, preset: &ShadowPreset) {
        self.stack.apply(preset.layers);
    }

    /// Restore the single default layer.
    pub fn reset(&mut self) {
        self.stack.reset();
    }

    pub fn output_code(&self) -> String {
        shadow_code(&self.stack, self.format)
    }

    pub async fn copy<ClipboardImpl, NotifierImpl>(
        &self,
        clipboard: &ClipboardImpl,
        notifier: &NotifierImpl,
    ) where
        ClipboardImpl: Clipboard,
        NotifierImpl: Notifier,
    {
        copy_output(self.output_code(), self.format, clipboard, notifier).await;
    }
}

impl Default for ShadowEditor {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Transform workspace.
pub struct TransformEditor {
    pub settings: TransformSettings,
    pub format: OutputFormat,
}

impl TransformEditor {
    pub fn new() -> Self {
        Self {
            settings: TransformSettings::IDENTITY,
            format: OutputFormat::Css,
        }
    }

    /// Overwrite the settings with a preset's record.
    pub fn apply_preset(&mut self, preset: &TransformPreset) {
        self.settings = preset.settings;
    }

    /// Restore the identity record.
    pub fn reset(&mut self) {
        self.settings = TransformSettings::IDENTITY;
    }

    pub fn output_code(&self) -> String {
        transform_code(&self.settings, self.format)
    }

    pub async fn copy<ClipboardImpl, NotifierImpl>(
        &self,
        clipboard: &ClipboardImpl,
        notifier: &NotifierImpl,
    ) where
        ClipboardImpl: Clipboard,
        NotifierImpl: Notifier,
    {
        copy_output(self.output_code(), self.format, clipboard, notifier).await;
    }
}

impl Default for TransformEditor {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
