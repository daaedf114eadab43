//! Preview-support helpers mirrored from the interactive shell.

use css_transforms::TransformSettings;

/// The 3D context a preview container adopts when the transform needs
/// depth: `transform-style: preserve-3d` plus the active perspective.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneContext {
    pub perspective_px: f32,
}

/// Container context for a transform preview, or `None` when flat rendering
/// suffices (no rotation and default perspective).
pub fn container_3d(settings: &TransformSettings) -> Option<SceneContext> {
    settings.needs_3d_context().then(|| SceneContext {
        perspective_px: settings.perspective,
    })
}

/// Value safe to hand a native color-picker input, which only accepts the
/// `#rrggbb` form; anything else falls back to black.
pub fn picker_value(color: &str) -> &str {
    if color.len() == 7 { color } else { "#000000" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_goes_3d_with_rotation() {
        let settings = TransformSettings {
            rotate_y: 25.0,
            ..TransformSettings::IDENTITY
        };
        let context = container_3d(&settings);
        assert_eq!(context.map(|scene| scene.perspective_px), Some(1000.0));
        assert_eq!(container_3d(&TransformSettings::IDENTITY), None);
    }

    #[test]
    fn picker_accepts_only_plain_hex() {
        assert_eq!(picker_value("#3b82f6"), "#3b82f6");
        assert_eq!(picker_value("#3b82f650"), "#000000");
        assert_eq!(picker_value("rebeccapurple"), "#000000");
    }
}
