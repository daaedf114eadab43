//! CSS Backgrounds 3 — §7 Drop Shadows: the `box-shadow` property.
//! Spec: <https://www.w3.org/TR/css-backgrounds-3/#box-shadow>

/// Identifier of a shadow layer, unique and stable for the lifetime of the
/// layer within its owning stack. Allocated from a monotonic counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u64);

/// One `<shadow>` in a `box-shadow` list.
///
/// Spec: <https://www.w3.org/TR/css-backgrounds-3/#typedef-shadow>
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowLayer {
    pub id: LayerId,
    pub offset_x: f32,
    pub offset_y: f32,
    /// Blur radius; non-negative by widget contract, not validated here.
    pub blur: f32,
    pub spread: f32,
    /// Passed through to the output verbatim; never validated.
    pub color: String,
    pub inset: bool,
}

impl ShadowLayer {
    /// Serialize one layer: `[inset ]Xpx Ypx Bpx Spx <color>`.
    pub fn to_css(&self) -> String {
        let inset_prefix = if self.inset { "inset " } else { "" };
        format!(
            "{inset_prefix}{}px {}px {}px {}px {}",
            self.offset_x, self.offset_y, self.blur, self.spread, self.color
        )
    }
}

/// Field values for a layer without an identity, used to seed new layers and
/// to hold immutable preset bundles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowTemplate {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: &'static str,
    pub inset: bool,
}

/// Seed values for a freshly added layer: a soft semi-transparent black.
pub const DEFAULT_LAYER: ShadowTemplate = ShadowTemplate {
    offset_x: 0.0,
    offset_y: 2.0,
    blur: 4.0,
    spread: 0.0,
    color: "#00000025",
    inset: false,
};

/// Partial update for a single layer; `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct LayerPatch {
    pub offset_x: Option<f32>,
    pub offset_y: Option<f32>,
    pub blur: Option<f32>,
    pub spread: Option<f32>,
    pub color: Option<String>,
    pub inset: Option<bool>,
}

/// Editable `box-shadow` state.
///
/// Layer order is paint order — the first layer paints on top — so storage
/// order is significant and serialization never sorts. Editing keeps at
/// least one layer present (`remove_layer` refuses to empty the stack).
#[derive(Clone, Debug)]
pub struct ShadowStack {
    layers: Vec<ShadowLayer>,
    next_layer_id: u64,
}

impl Default for ShadowStack {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ShadowStack {
    /// A stack holding the single default layer.
    pub fn new() -> Self {
        let mut stack = Self {
            layers: Vec::new(),
            next_layer_id: 0,
        };
        stack.apply(&[DEFAULT_LAYER]);
        stack
    }

    /// Layers in storage (paint) order.
    #[inline]
    pub fn layers(&self) -> &[ShadowLayer] {
        &self.layers
    }

    /// Replace all layers with copies of `templates`, in order, each with a
    /// fresh identifier.
    pub fn apply(&mut self, templates: &[ShadowTemplate]) {
        self.layers = templates
            .iter()
            .map(|template| ShadowLayer {
                id: self.allocate_layer_id(),
                offset_x: template.offset_x,
                offset_y: template.offset_y,
                blur: template.blur,
                spread: template.spread,
                color: template.color.to_owned(),
                inset: template.inset,
            })
            .collect();
    }

    /// Append a new layer seeded from [`DEFAULT_LAYER`].
    pub fn add_layer(&mut self) {
        let layer = ShadowLayer {
            id: self.allocate_layer_id(),
            offset_x: DEFAULT_LAYER.offset_x,
            offset_y: DEFAULT_LAYER.offset_y,
            blur: DEFAULT_LAYER.blur,
            spread: DEFAULT_LAYER.spread,
            color: DEFAULT_LAYER.color.to_owned(),
            inset: DEFAULT_LAYER.inset,
        };
        self.layers.push(layer);
    }

    /// Remove the layer with the given id. A no-op while only one layer is
    /// left (a box-shadow value needs one) or when the id matches nothing.
    pub fn remove_layer(&mut self, id: LayerId) {
        if self.layers.len() <= 1 {
            return;
        }
        self.layers.retain(|layer| layer.id != id);
    }

    /// Patch the layer with the given id; unknown ids are ignored.
    pub fn update_layer(&mut self, id: LayerId, patch: LayerPatch) {
        if let Some(layer) = self.layers.iter_mut().find(|layer| layer.id == id) {
            if let Some(offset_x) = patch.offset_x {
                layer.offset_x = offset_x;
            }
            if let Some(offset_y) = patch.offset_y {
                layer.offset_y = offset_y;
            }
            if let Some(blur) = patch.blur {
                layer.blur = blur;
            }
            if let Some(spread) = patch.spread {
                layer.spread = spread;
            }
            if let Some(color) = patch.color {
                layer.color = color;
            }
            if let Some(inset) = patch.inset {
                layer.inset = inset;
            }
        }
    }

    /// Restore the single default layer.
    pub fn reset(&mut self) {
        self.apply(&[DEFAULT_LAYER]);
    }

    /// Serialize the whole stack as a `box-shadow` value, layers joined with
    /// `", "` in storage order.
    pub fn to_css(&self) -> String {
        self.layers
            .iter()
            .map(ShadowLayer::to_css)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn allocate_layer_id(&mut self) -> LayerId {
        self.next_layer_id += 1;
        LayerId(self.next_layer_id)
    }
}
