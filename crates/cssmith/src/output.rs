//! Rendered output: raw CSS declarations, or the Tailwind fallback block.
//!
//! The Tailwind mode never emits utility classes — these values cannot be
//! expressed as utilities, so it wraps the same raw declaration(s) in a
//! class rule behind an explanatory comment.

use css_backgrounds_borders::ShadowStack;
use css_images::Gradient;
use css_transforms::TransformSettings;

/// Which code block the copy button produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Css,
    Tailwind,
}

impl OutputFormat {
    /// Uppercase label used in copy notifications.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS",
            Self::Tailwind => "TAILWIND",
        }
    }
}

/// Render a gradient as a `background` declaration or its Tailwind fallback.
pub fn gradient_code(gradient: &Gradient, format: OutputFormat) -> String {
    let declaration = format!("background: {};", gradient.to_css());
    match format {
        OutputFormat::Css => declaration,
        OutputFormat::Tailwind => tailwind_block(
            "Tailwind cannot express complex gradients; use custom CSS",
            "gradient-bg",
            &declaration,
        ),
    }
}

/// Render a shadow stack as a `box-shadow` declaration or its Tailwind
/// fallback.
pub fn shadow_code(stack: &ShadowStack, format: OutputFormat) -> String {
    let declaration = format!("box-shadow: {};", stack.to_css());
    match format {
        OutputFormat::Css => declaration,
        OutputFormat::Tailwind => tailwind_block(
            "Tailwind cannot express complex box-shadows; use custom CSS",
            "shadow-custom",
            &declaration,
        ),
    }
}

/// Render transform settings as their declaration group: optional
/// `perspective` and `transform-origin` lines followed by the `transform`
/// declaration, continuation lines indented two spaces.
pub fn transform_code(settings: &TransformSettings, format: OutputFormat) -> String {
    let mut declarations: Vec<String> = Vec::new();
    declarations.extend(settings.perspective_declaration());
    declarations.extend(settings.origin_declaration());
    declarations.push(format!("transform: {};", settings.to_css()));
    let body = declarations.join("\n  ");
    match format {
        OutputFormat::Css => body,
        OutputFormat::Tailwind => tailwind_block(
            "Tailwind cannot express complex 3D transforms; use custom CSS",
            "transform-custom",
            &body,
        ),
    }
}

// Class-rule template shared by all three Tailwind fallbacks.
fn tailwind_block(note: &str, class_name: &str, body: &str) -> String {
    format!("/* {note} */\n.{class_name} {{\n  {body}\n}}")
}
