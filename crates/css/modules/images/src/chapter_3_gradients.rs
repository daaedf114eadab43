//! CSS Images 3 — §3 Gradients: `linear-gradient()` and `radial-gradient()`.
//! Spec: <https://www.w3.org/TR/css-images-3/#gradients>

/// Identifier of a color stop, unique and stable for the lifetime of the
/// stop within its owning gradient. Allocated from a monotonic counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StopId(u64);

/// A `<linear-color-stop>`: a color plus its position along the gradient
/// line, in percent.
///
/// Spec: <https://www.w3.org/TR/css-images-3/#color-stop-syntax>
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub id: StopId,
    /// Passed through to the output verbatim; never validated.
    pub color: String,
    /// Percent of the gradient line, 0–100 by widget contract.
    pub position: f32,
}

/// Which gradient function to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientShape {
    /// Spec: <https://www.w3.org/TR/css-images-3/#linear-gradients>
    Linear,
    /// Spec: <https://www.w3.org/TR/css-images-3/#radial-gradients>
    Radial,
}

/// Partial update for a single stop; `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct StopPatch {
    pub color: Option<String>,
    pub position: Option<f32>,
}

/// Editable gradient state: shape, gradient-line angle, and color stops.
///
/// Stops keep insertion order in storage; positions may coincide or be
/// unsorted there, and serialization sorts a copy by position without
/// touching the stored order. Editing keeps at least two stops present
/// (`remove_stop` refuses to go below two).
#[derive(Clone, Debug)]
pub struct Gradient {
    pub shape: GradientShape,
    /// Gradient-line angle in degrees; only meaningful for `Linear`.
    pub angle_deg: f32,
    stops: Vec<ColorStop>,
    next_stop_id: u64,
}

/// Seed values for a stop added through [`Gradient::add_stop`].
const NEW_STOP_COLOR: &str = "#888888";
const NEW_STOP_POSITION: f32 = 50.0;

impl Gradient {
    /// Build a gradient from an ordered color list, spreading stop positions
    /// evenly: first at 0, last at 100, interior stops at `100/(N-1) * index`.
    /// A single-color list yields one stop at position 0.
    pub fn from_colors(shape: GradientShape, angle_deg: f32, colors: &[&str]) -> Self {
        let mut gradient = Self {
            shape,
            angle_deg,
            stops: Vec::new(),
            next_stop_id: 0,
        };
        gradient.apply_colors(colors);
        gradient
    }

    /// Replace all stops with an even expansion of `colors` (same spacing as
    /// [`Gradient::from_colors`]). Every new stop gets a fresh identifier.
    pub fn apply_colors(&mut self, colors: &[&str]) {
        self.stops = colors
            .iter()
            .enumerate()
            .map(|(index, color)| ColorStop {
                id: self.allocate_stop_id(),
                color: (*color).to_owned(),
                position: spaced_position(index, colors.len()),
            })
            .collect();
    }

    /// Stops in storage (insertion) order.
    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Append a new mid-gray stop at the 50% mark.
    pub fn add_stop(&mut self) {
        let stop = ColorStop {
            id: self.allocate_stop_id(),
            color: NEW_STOP_COLOR.to_owned(),
            position: NEW_STOP_POSITION,
        };
        self.stops.push(stop);
    }

    /// Remove the stop with the given id. A no-op while only two stops are
    /// left (a gradient needs two) or when the id matches nothing.
    pub fn remove_stop(&mut self, id: StopId) {
        if self.stops.len() <= 2 {
            return;
        }
        self.stops.retain(|stop| stop.id != id);
    }

    /// Patch the stop with the given id; unknown ids are ignored.
    pub fn update_stop(&mut self, id: StopId, patch: StopPatch) {
        if let Some(stop) = self.stops.iter_mut().find(|stop| stop.id == id) {
            if let Some(color) = patch.color {
                stop.color = color;
            }
            if let Some(position) = patch.position {
                stop.position = position;
            }
        }
    }

    /// Serialize to a CSS `<image>` gradient function.
    ///
    /// Stops are emitted ascending by position (stable order for ties).
    /// Linear gradients carry the angle; radial gradients always emit the
    /// `circle` shape and ignore the angle.
    pub fn to_css(&self) -> String {
        let mut ordered: Vec<&ColorStop> = self.stops.iter().collect();
        ordered.sort_by(|left, right| left.position.total_cmp(&right.position));
        let stop_list = ordered
            .iter()
            .map(|stop| format!("{} {}%", stop.color, stop.position))
            .collect::<Vec<_>>()
            .join(", ");
        match self.shape {
            GradientShape::Linear => format!("linear-gradient({}deg, {stop_list})", self.angle_deg),
            GradientShape::Radial => format!("radial-gradient(circle, {stop_list})"),
        }
    }

    fn allocate_stop_id(&mut self) -> StopId {
        self.next_stop_id += 1;
        StopId(self.next_stop_id)
    }
}

/// Even-spacing rule for expanded color lists. The first stop pins to 0 and
/// the last to 100; a one-element list degenerates to a single stop at 0.
fn spaced_position(index: usize, count: usize) -> f32 {
    if index == 0 {
        0.0
    } else if index == count - 1 {
        100.0
    } else {
        (100.0 / (count as f32 - 1.0)) * index as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ocean() -> Gradient {
        Gradient::from_colors(
            GradientShape::Linear,
            90.0,
            &["#2A7B9B", "#57C785", "#EDDD53"],
        )
    }

    #[test]
    fn linear_serialization_matches_expected_form() {
        assert_eq!(
            ocean().to_css(),
            "linear-gradient(90deg, #2A7B9B 0%, #57C785 50%, #EDDD53 100%)"
        );
    }

    #[test]
    fn radial_ignores_angle() {
        let mut gradient = ocean();
        gradient.shape = GradientShape::Radial;
        gradient.angle_deg = 45.0;
        assert_eq!(
            gradient.to_css(),
            "radial-gradient(circle, #2A7B9B 0%, #57C785 50%, #EDDD53 100%)"
        );
    }

    #[test]
    fn output_sorts_by_position_without_mutating_storage() {
        let mut gradient = ocean();
        let first_id = gradient.stops()[0].id;
        gradient.update_stop(
            first_id,
            StopPatch {
                position: Some(100.0),
                ..StopPatch::default()
            },
        );
        // Storage keeps insertion order; output reorders. The moved stop ties
        // with the former last stop and stays ahead of it (stable sort keeps
        // storage order for equal positions).
        assert_eq!(gradient.stops()[0].position, 100.0);
        assert_eq!(
            gradient.to_css(),
            "linear-gradient(90deg, #57C785 50%, #2A7B9B 100%, #EDDD53 100%)"
        );
        assert_eq!(gradient.stops()[0].id, first_id);
    }

    #[test]
    fn expansion_spaces_positions_evenly() {
        let rainbow = [
            "#ff0000", "#ff7f00", "#ffff00", "#00ff00", "#0000ff", "#4b0082", "#9400d3",
        ];
        let gradient = Gradient::from_colors(GradientShape::Linear, 90.0, &rainbow);
        let positions: Vec<f32> = gradient.stops().iter().map(|stop| stop.position).collect();
        let step = 100.0 / 6.0;
        assert_eq!(positions[0], 0.0);
        assert_eq!(positions[1], step);
        assert_eq!(positions[2], step * 2.0);
        assert_eq!(positions[5], step * 5.0);
        assert_eq!(positions[6], 100.0);
    }

    #[test]
    fn single_color_expansion_pins_to_zero() {
        let gradient = Gradient::from_colors(GradientShape::Linear, 90.0, &["#123456"]);
        assert_eq!(gradient.stops().len(), 1);
        assert_eq!(gradient.stops()[0].position, 0.0);
    }

    #[test]
    fn added_stops_use_seed_values_and_fresh_ids() {
        let mut gradient = ocean();
        gradient.add_stop();
        let stops = gradient.stops();
        assert_eq!(stops.len(), 4);
        assert_eq!(stops[3].color, "#888888");
        assert_eq!(stops[3].position, 50.0);
        let ids: HashSet<StopId> = stops.iter().map(|stop| stop.id).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn remove_refuses_to_drop_below_two_stops() {
        let mut gradient = Gradient::from_colors(GradientShape::Linear, 90.0, &["#000000", "#ffffff"]);
        let first_id = gradient.stops()[0].id;
        gradient.remove_stop(first_id);
        assert_eq!(gradient.stops().len(), 2);
    }

    #[test]
    fn remove_drops_exactly_the_matching_stop() {
        let mut gradient = ocean();
        let middle_id = gradient.stops()[1].id;
        gradient.remove_stop(middle_id);
        let colors: Vec<&str> = gradient
            .stops()
            .iter()
            .map(|stop| stop.color.as_str())
            .collect();
        assert_eq!(colors, ["#2A7B9B", "#EDDD53"]);
    }

    #[test]
    fn applied_colors_get_fresh_ids() {
        let mut gradient = ocean();
        let old_ids: Vec<StopId> = gradient.stops().iter().map(|stop| stop.id).collect();
        gradient.apply_colors(&["#667eea", "#764ba2"]);
        for stop in gradient.stops() {
            assert!(!old_ids.contains(&stop.id));
        }
    }

    #[test]
    fn malformed_colors_pass_through_verbatim() {
        let gradient = Gradient::from_colors(GradientShape::Linear, 0.0, &["not-a-color", "#gg0011"]);
        assert_eq!(
            gradient.to_css(),
            "linear-gradient(0deg, not-a-color 0%, #gg0011 100%)"
        );
    }
}
