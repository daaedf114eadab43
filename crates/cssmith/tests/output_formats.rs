//! Output rendering across the CSS and Tailwind formats.

use cssmith::output::{gradient_code, shadow_code, transform_code};
use cssmith::{
    GradientEditor, OutputFormat, ShadowStack, TransformOrigin, TransformSettings,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_editor_seeds_the_default_ramp() {
        let editor = GradientEditor::new();
        assert_eq!(
            editor.output_code(),
            "background: linear-gradient(90deg, #2A7B9B 0%, #57C785 50%, #EDDD53 100%);"
        );
    }

    #[test]
    fn gradient_tailwind_block_wraps_the_declaration() {
        let editor = GradientEditor::new();
        let code = gradient_code(&editor.gradient, OutputFormat::Tailwind);
        assert_eq!(
            code,
            "/* Tailwind cannot express complex gradients; use custom CSS */\n\
             .gradient-bg {\n\
             \x20 background: linear-gradient(90deg, #2A7B9B 0%, #57C785 50%, #EDDD53 100%);\n\
             }"
        );
    }

    #[test]
    fn shadow_declaration_wraps_the_stack_value() {
        let stack = ShadowStack::new();
        assert_eq!(
            shadow_code(&stack, OutputFormat::Css),
            "box-shadow: 0px 2px 4px 0px #00000025;"
        );
    }

    #[test]
    fn shadow_tailwind_block_uses_the_custom_class() {
        let stack = ShadowStack::new();
        let code = shadow_code(&stack, OutputFormat::Tailwind);
        assert!(code.starts_with(
            "/* Tailwind cannot express complex box-shadows; use custom CSS */\n.shadow-custom {"
        ));
        assert!(code.contains("\n  box-shadow: 0px 2px 4px 0px #00000025;\n"));
        assert!(code.ends_with('}'));
    }

    #[test]
    fn identity_transform_renders_the_bare_declaration() {
        // The transform value is empty for identity settings; the declaration
        // wrapper still appears, with no perspective or origin lines.
        assert_eq!(
            transform_code(&TransformSettings::IDENTITY, OutputFormat::Css),
            "transform: ;"
        );
    }

    #[test]
    fn transform_declarations_stack_with_continuation_indent() {
        let settings = TransformSettings {
            rotate_x: 45.0,
            translate_y: -20.0,
            perspective: 500.0,
            origin: TransformOrigin::Top,
            ..TransformSettings::IDENTITY
        };
        assert_eq!(
            transform_code(&settings, OutputFormat::Css),
            "perspective: 500px;\n\
             \x20 transform-origin: top;\n\
             \x20 transform: translate(0px, -20px) rotateX(45deg);"
        );
    }

    #[test]
    fn transform_tailwind_block_carries_all_declarations() {
        let settings = TransformSettings {
            rotate_y: 180.0,
            ..TransformSettings::IDENTITY
        };
        assert_eq!(
            transform_code(&settings, OutputFormat::Tailwind),
            "/* Tailwind cannot express complex 3D transforms; use custom CSS */\n\
             .transform-custom {\n\
             \x20 transform: rotateY(180deg);\n\
             }"
        );
    }

    #[test]
    fn format_labels_are_uppercase() {
        assert_eq!(OutputFormat::Css.label(), "CSS");
        assert_eq!(OutputFormat::Tailwind.label(), "TAILWIND");
    }
}
