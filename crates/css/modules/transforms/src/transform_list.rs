//! Serialization of [`TransformSettings`] to a `<transform-list>` and its
//! companion declarations.
//! Spec: <https://www.w3.org/TR/css-transforms-1/#transform-functions>
//! Spec: <https://www.w3.org/TR/css-transforms-2/#transform-functions>

use crate::{DEFAULT_PERSPECTIVE, TransformOrigin, TransformSettings};

impl TransformSettings {
    /// Serialize to a space-joined `<transform-list>`.
    ///
    /// Clauses are evaluated as an ordered table — translate, rotateX,
    /// rotateY, rotateZ, scale, skewX, skewY — and each is elided when it is
    /// a no-op, so identity settings produce the empty string.
    pub fn to_css(&self) -> String {
        let clauses = [
            self.translate_clause(),
            angle_clause("rotateX", self.rotate_x),
            angle_clause("rotateY", self.rotate_y),
            angle_clause("rotateZ", self.rotate_z),
            self.scale_clause(),
            angle_clause("skewX", self.skew_x),
            angle_clause("skewY", self.skew_y),
        ];
        clauses
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The `perspective` declaration, or `None` at the default distance.
    ///
    /// Spec: <https://www.w3.org/TR/css-transforms-2/#perspective-property>
    pub fn perspective_declaration(&self) -> Option<String> {
        (self.perspective != DEFAULT_PERSPECTIVE)
            .then(|| format!("perspective: {}px;", self.perspective))
    }

    /// The `transform-origin` declaration, or `None` for the centered
    /// default.
    pub fn origin_declaration(&self) -> Option<String> {
        (self.origin != TransformOrigin::Center)
            .then(|| format!("transform-origin: {};", self.origin))
    }

    // Elided only when X, Y and Z are all at their zero default. A default Z
    // keeps the 2D translate() form no matter what X and Y hold.
    fn translate_clause(&self) -> Option<String> {
        if self.translate_x == 0.0 && self.translate_y == 0.0 && self.translate_z == 0.0 {
            return None;
        }
        if self.translate_z == 0.0 {
            return Some(format!(
                "translate({}px, {}px)",
                self.translate_x, self.translate_y
            ));
        }
        Some(format!(
            "translate3d({}px, {}px, {}px)",
            self.translate_x, self.translate_y, self.translate_z
        ))
    }

    // Elided at the unit identity; scale3d only once Z leaves 1.
    fn scale_clause(&self) -> Option<String> {
        if self.scale_x == 1.0 && self.scale_y == 1.0 && self.scale_z == 1.0 {
            return None;
        }
        if self.scale_z == 1.0 {
            return Some(format!("scale({}, {})", self.scale_x, self.scale_y));
        }
        Some(format!(
            "scale3d({}, {}, {})",
            self.scale_x, self.scale_y, self.scale_z
        ))
    }
}

/// Single-axis angle clause (rotations and skews): elided at 0 degrees.
fn angle_clause(function_name: &str, degrees: f32) -> Option<String> {
    (degrees != 0.0).then(|| format!("{function_name}({degrees}deg)"))
}
