use crate::{Float, Rgb};

/// A single layer of a box shadow.
///
/// Layers are assembled fluently, starting from [`ShadowLayer::new`], which
/// creates a visible, outer, fully transparent black layer. Offsets, blur, and
/// spread are in pixels. Opacity is in percent and clamped to `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ShadowLayer {
    offset_x: i32,
    offset_y: i32,
    blur: i32,
    spread: i32,
    color: Rgb,
    #[cfg_attr(feature = "state", serde(deserialize_with = "deserialize_opacity"))]
    opacity: u8,
    #[cfg_attr(feature = "state", serde(default, rename = "isInner"))]
    inset: bool,
    #[cfg_attr(feature = "state", serde(default = "default_visible", rename = "isVisible"))]
    visible: bool,
}

#[cfg(feature = "state")]
fn default_visible() -> bool {
    true
}

/// Deserialize an opacity, rounding and clamping it to `0..=100`.
#[cfg(feature = "state")]
fn deserialize_opacity<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opacity = <Float as serde::Deserialize>::deserialize(deserializer)?;
    Ok(opacity.round().clamp(0.0, 100.0) as u8)
}

impl ShadowLayer {
    /// Create a new shadow layer with the given geometry.
    pub const fn new(offset_x: i32, offset_y: i32, blur: i32, spread: i32) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color: Rgb::new(0, 0, 0),
            opacity: 0,
            inset: false,
            visible: true,
        }
    }

    /// Update the color.
    #[must_use = "method returns a new layer and does not mutate the original value"]
    pub fn with_color(&self, color: Rgb) -> Self {
        Self { color, ..*self }
    }

    /// Update the opacity, clamping it to `0..=100`.
    #[must_use = "method returns a new layer and does not mutate the original value"]
    pub fn with_opacity(&self, opacity: u8) -> Self {
        Self {
            opacity: opacity.min(100),
            ..*self
        }
    }

    /// Turn this layer into an inner shadow.
    #[must_use = "method returns a new layer and does not mutate the original value"]
    pub fn inset(&self) -> Self {
        Self {
            inset: true,
            ..*self
        }
    }

    /// Hide this layer.
    #[must_use = "method returns a new layer and does not mutate the original value"]
    pub fn hidden(&self) -> Self {
        Self {
            visible: false,
            ..*self
        }
    }

    /// Get the horizontal and vertical offsets.
    pub const fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }

    /// Get the blur radius.
    pub const fn blur(&self) -> i32 {
        self.blur
    }

    /// Get the spread radius.
    pub const fn spread(&self) -> i32 {
        self.spread
    }

    /// Get the color.
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Get the opacity in percent.
    pub const fn opacity(&self) -> u8 {
        self.opacity
    }

    /// Determine whether this layer is an inner shadow.
    pub const fn is_inset(&self) -> bool {
        self.inset
    }

    /// Determine whether this layer contributes to the rendered CSS.
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    fn alpha(&self) -> Float {
        self.opacity as Float / 100.0
    }

    /// Render this layer as a CSS shadow value.
    pub fn to_css(&self) -> String {
        let [r, g, b] = *self.color.as_ref();
        format!(
            "{}{}px {}px {}px {}px rgba({}, {}, {}, {})",
            if self.inset { "inset " } else { "" },
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            r,
            g,
            b,
            self.alpha()
        )
    }

    /// Render this layer for a Tailwind arbitrary value, which separates words
    /// with underscores and uses the bare hex color when fully opaque.
    pub fn to_tailwind(&self) -> String {
        let color = if self.opacity == 100 {
            self.color.to_string()
        } else {
            let [r, g, b] = *self.color.as_ref();
            format!("rgba({},{},{},{})", r, g, b, self.alpha())
        };

        format!(
            "{}{}px_{}px_{}px_{}px_{}",
            if self.inset { "inset_" } else { "" },
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            color
        )
    }
}

impl Default for ShadowLayer {
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A box shadow with any number of layers.
///
/// Hidden layers are kept but do not contribute to the rendered CSS. Displaying
/// a box shadow produces the same text as [`BoxShadow::to_css`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct BoxShadow {
    layers: Vec<ShadowLayer>,
}

impl BoxShadow {
    /// Create a new box shadow with the given layers.
    pub fn new(layers: Vec<ShadowLayer>) -> Self {
        Self { layers }
    }

    /// Get the layers.
    pub fn layers(&self) -> &[ShadowLayer] {
        &self.layers
    }

    /// Get mutable access to the layers.
    pub fn layers_mut(&mut self) -> &mut Vec<ShadowLayer> {
        &mut self.layers
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Move all layers so that the layer at index `active` ends up at the
    /// given offsets. The other layers keep their offsets relative to the
    /// active layer. This method returns whether the active layer exists.
    pub fn set_offset_all(&mut self, active: usize, offset_x: i32, offset_y: i32) -> bool {
        let Some(anchor) = self.layers.get(active).copied() else {
            return false;
        };

        let dx = offset_x.saturating_sub(anchor.offset_x);
        let dy = offset_y.saturating_sub(anchor.offset_y);
        for layer in &mut self.layers {
            layer.offset_x = layer.offset_x.saturating_add(dx);
            layer.offset_y = layer.offset_y.saturating_add(dy);
        }
        true
    }

    /// Change the blur of all layers by the same amount, so that the layer at
    /// index `active` ends up with the given blur. Blur never drops below
    /// zero. This method returns whether the active layer exists.
    pub fn set_blur_all(&mut self, active: usize, blur: i32) -> bool {
        let Some(anchor) = self.layers.get(active).copied() else {
            return false;
        };

        let delta = blur.saturating_sub(anchor.blur);
        for layer in &mut self.layers {
            layer.blur = layer.blur.saturating_add(delta).max(0);
        }
        true
    }

    /// Change the spread of all layers by the same amount, so that the layer
    /// at index `active` ends up with the given spread. This method returns
    /// whether the active layer exists.
    pub fn set_spread_all(&mut self, active: usize, spread: i32) -> bool {
        let Some(anchor) = self.layers.get(active).copied() else {
            return false;
        };

        let delta = spread.saturating_sub(anchor.spread);
        for layer in &mut self.layers {
            layer.spread = layer.spread.saturating_add(delta);
        }
        true
    }

    /// Scale the opacity of all layers by the same factor, so that the layer
    /// at index `active` ends up with the given opacity. Results are rounded
    /// and clamped to `0..=100`. If the active layer is fully transparent, all
    /// layers get the given opacity. This method returns whether the active
    /// layer exists.
    pub fn set_opacity_all(&mut self, active: usize, opacity: u8) -> bool {
        let Some(anchor) = self.layers.get(active).copied() else {
            return false;
        };

        let target = u32::from(opacity.min(100));
        let base = u32::from(anchor.opacity);
        for layer in &mut self.layers {
            let scaled = if base == 0 {
                target
            } else {
                (u32::from(layer.opacity) * target + base / 2) / base
            };
            layer.opacity = scaled.min(100) as u8;
        }
        true
    }

    /// Make all layers inner or outer shadows.
    pub fn set_inset_all(&mut self, inset: bool) {
        for layer in &mut self.layers {
            layer.inset = inset;
        }
    }

    fn visible(&self) -> impl Iterator<Item = &ShadowLayer> {
        self.layers.iter().filter(|layer| layer.visible)
    }

    /// Render the value of the `box-shadow` property.
    pub fn to_css(&self) -> String {
        self.visible()
            .map(ShadowLayer::to_css)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render the Tailwind class, e.g., `shadow-[0px_1px_3px_0px_#000000]`.
    pub fn to_tailwind(&self) -> String {
        let layers = self
            .visible()
            .map(ShadowLayer::to_tailwind)
            .collect::<Vec<_>>()
            .join(",");
        format!("shadow-[{}]", layers)
    }

    /// Count how often each color is used, in order of first use. Hidden
    /// layers count, too.
    pub fn color_counts(&self) -> Vec<(Rgb, usize)> {
        let mut counts: Vec<(Rgb, usize)> = Vec::new();
        for layer in &self.layers {
            let index = counts
                .iter()
                .position(|entry| entry.0 == layer.color)
                .unwrap_or_else(|| {
                    counts.push((layer.color, 0));
                    counts.len() - 1
                });
            counts[index].1 += 1;
        }
        counts
    }
}

impl From<Vec<ShadowLayer>> for BoxShadow {
    fn from(value: Vec<ShadowLayer>) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod test {
    use super::{BoxShadow, ShadowLayer};
    use crate::Rgb;

    #[test]
    fn test_layer() {
        let layer = ShadowLayer::new(4, -2, 8, 0)
            .with_color(Rgb::new(30, 136, 229))
            .with_opacity(25);
        assert_eq!(layer.to_css(), "4px -2px 8px 0px rgba(30, 136, 229, 0.25)");
        assert_eq!(layer.to_tailwind(), "4px_-2px_8px_0px_rgba(30,136,229,0.25)");

        let layer = layer.with_opacity(200).inset();
        assert_eq!(layer.opacity(), 100);
        assert_eq!(layer.to_css(), "inset 4px -2px 8px 0px rgba(30, 136, 229, 1)");
        assert_eq!(layer.to_tailwind(), "inset_4px_-2px_8px_0px_#1e88e5");
    }

    #[test]
    fn test_box_shadow() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        let shadow = BoxShadow::new(vec![
            ShadowLayer::new(0, 0, 1, 0).with_color(red).with_opacity(50),
            ShadowLayer::new(0, 0, 2, 0).with_color(blue).with_opacity(7).hidden(),
            ShadowLayer::new(0, 0, 3, 0).with_color(red).with_opacity(7),
        ]);

        assert_eq!(
            shadow.to_string(),
            "0px 0px 1px 0px rgba(255, 0, 0, 0.5), 0px 0px 3px 0px rgba(255, 0, 0, 0.07)"
        );
        assert_eq!(
            shadow.to_tailwind(),
            "shadow-[0px_0px_1px_0px_rgba(255,0,0,0.5),0px_0px_3px_0px_rgba(255,0,0,0.07)]"
        );
        assert_eq!(shadow.color_counts(), vec![(red, 2), (blue, 1)]);

        assert_eq!(BoxShadow::default().to_css(), "");
        assert_eq!(BoxShadow::default().to_tailwind(), "shadow-[]");
    }

    #[test]
    fn test_bulk_edits() {
        let mut shadow = BoxShadow::new(vec![
            ShadowLayer::new(0, 1, 3, 0).with_opacity(10),
            ShadowLayer::new(4, 6, 0, 2).with_opacity(50),
        ]);

        assert!(shadow.set_offset_all(0, 2, 2));
        assert_eq!(shadow.layers()[0].offset(), (2, 2));
        assert_eq!(shadow.layers()[1].offset(), (6, 7));

        assert!(shadow.set_blur_all(0, 1));
        assert_eq!(shadow.layers()[0].blur(), 1);
        assert_eq!(shadow.layers()[1].blur(), 0);

        assert!(shadow.set_spread_all(1, 0));
        assert_eq!(shadow.layers()[0].spread(), -2);
        assert_eq!(shadow.layers()[1].spread(), 0);

        assert!(shadow.set_opacity_all(0, 30));
        assert_eq!(shadow.layers()[0].opacity(), 30);
        assert_eq!(shadow.layers()[1].opacity(), 100);

        shadow.set_inset_all(true);
        assert!(shadow.layers().iter().all(ShadowLayer::is_inset));
        shadow.set_inset_all(false);
        assert!(!shadow.layers().iter().any(ShadowLayer::is_inset));

        let before = shadow.clone();
        assert!(!shadow.set_offset_all(2, 0, 0));
        assert!(!shadow.set_blur_all(2, 0));
        assert!(!shadow.set_spread_all(2, 0));
        assert!(!shadow.set_opacity_all(2, 0));
        assert_eq!(shadow, before);

        let mut shadow = BoxShadow::new(vec![
            ShadowLayer::new(0, 0, 0, 0),
            ShadowLayer::new(0, 0, 0, 0).with_opacity(40),
        ]);
        assert!(shadow.set_opacity_all(0, 20));
        assert_eq!(shadow.layers()[0].opacity(), 20);
        assert_eq!(shadow.layers()[1].opacity(), 20);
    }

    #[cfg(feature = "state")]
    #[test]
    fn test_deserialize_opacity() -> Result<(), serde_json::Error> {
        let layer: ShadowLayer = serde_json::from_str(
            r##"{"offsetX":0,"offsetY":1,"blur":3,"spread":0,"color":"#000000","opacity":250}"##,
        )?;
        assert_eq!(layer.opacity(), 100);
        assert!(layer.is_visible());
        assert_eq!(layer.to_css(), "0px 1px 3px 0px rgba(0, 0, 0, 1)");

        let layer: ShadowLayer = serde_json::from_str(
            r##"{"offsetX":0,"offsetY":1,"blur":3,"spread":0,"color":"#000000","opacity":-5}"##,
        )?;
        assert_eq!(layer.opacity(), 0);

        let layer: ShadowLayer = serde_json::from_str(
            r##"{"offsetX":0,"offsetY":1,"blur":3,"spread":0,"color":"#000000","opacity":12.6}"##,
        )?;
        assert_eq!(layer.opacity(), 13);
        Ok(())
    }
}
