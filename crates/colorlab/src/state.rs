//! Optional module with explicit, serializable application state.
//!
//! [`AppState`] bundles everything a design tool remembers between sessions:
//! the [`Appearance`], the color tool's [`ColorState`], and the saved shadow
//! presets of the [`ShadowLibrary`]. Nothing is global. Instead, state is
//! loaded from and saved to a caller-supplied [`Store`], with each part
//! serialized as JSON under its own key. [`MemoryStore`] is a simple store
//! backed by a hash map.
//!
//! ```
//! # use colorlab::state::{AppState, MemoryStore};
//! # use colorlab::Rgb;
//! let mut store = MemoryStore::new();
//! let mut state = AppState::default();
//! state.color_mut().set_color(Rgb::new(255, 0, 0));
//! state.save(&mut store)?;
//!
//! let restored = AppState::load(&store);
//! assert_eq!(restored.color().color(), Rgb::new(255, 0, 0));
//! assert_eq!(restored.color().history()[0], Rgb::new(255, 0, 0));
//! # Ok::<(), colorlab::error::StateError>(())
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::core::clamp_alpha;
use crate::css::{BoxShadow, ColorFormats};
use crate::detect::{detect, Detection};
use crate::error::StateError;
use crate::palette::{closest_color_name, generate_palette, PALETTE_SIZE};
use crate::{Cmyk, ColorFormatError, Float, Hsl, Hsv, Rgb};

/// A key-value store for serialized state.
///
/// Implementations are infallible. A store that can fail, say, because it is
/// backed by a file, should log the failure and carry on.
pub trait Store {
    /// Get the value for the given key.
    fn get(&self, key: &str) -> Option<String>;

    /// Set the value for the given key.
    fn set(&mut self, key: &str, value: String);

    /// Delete the value for the given key.
    fn delete(&mut self, key: &str);
}

/// A store keeping its entries in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

// ====================================================================================================================
// Color State
// ====================================================================================================================

/// The maximum number of colors in the history.
pub const HISTORY_LIMIT: usize = 10;

/// The state of the color tool.
///
/// The current color is always the first entry of the history, which holds
/// distinct colors only, most recent first, and at most [`HISTORY_LIMIT`]
/// of them. Setters clamp out-of-range values. All derived data is computed on
/// demand by [`ColorState::report`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorState {
    color: Rgb,
    alpha: Float,
    history: Vec<Rgb>,
    #[serde(default)]
    favorites: Vec<Rgb>,
}

impl ColorState {
    /// Create a new color state with the given color.
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            alpha: 1.0,
            history: vec![color],
            favorites: Vec::new(),
        }
    }

    /// Get the current color.
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Get the current alpha.
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Get the history, most recent first.
    pub fn history(&self) -> &[Rgb] {
        &self.history
    }

    /// Get the favorites, in order of addition.
    pub fn favorites(&self) -> &[Rgb] {
        &self.favorites
    }

    /// Make the given color the current color.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
        self.history.retain(|c| *c != color);
        self.history.insert(0, color);
        self.history.truncate(HISTORY_LIMIT);
    }

    /// Make the color with the given six-digit hex string the current color.
    /// Upon failure, the state is unchanged.
    pub fn set_hex(&mut self, hex: &str) -> Result<(), ColorFormatError> {
        self.set_color(Rgb::from_hex(hex)?);
        Ok(())
    }

    /// Detect the color in the given free-form text and make it the current
    /// color, also updating the alpha if the text has one. Upon failure, the
    /// state is unchanged.
    pub fn apply_input(&mut self, input: &str) -> Result<Detection, ColorFormatError> {
        let detection = detect(input)?;
        self.set_color(detection.rgb());
        if let Some(alpha) = detection.alpha() {
            self.set_alpha(alpha);
        }
        Ok(detection)
    }

    /// Update the red channel, clamping it to `0..=255`.
    pub fn set_red(&mut self, value: i64) {
        let c = self.color;
        self.set_color(Rgb::clamped(value, c.g() as i64, c.b() as i64));
    }

    /// Update the green channel, clamping it to `0..=255`.
    pub fn set_green(&mut self, value: i64) {
        let c = self.color;
        self.set_color(Rgb::clamped(c.r() as i64, value, c.b() as i64));
    }

    /// Update the blue channel, clamping it to `0..=255`.
    pub fn set_blue(&mut self, value: i64) {
        let c = self.color;
        self.set_color(Rgb::clamped(c.r() as i64, c.g() as i64, value));
    }

    /// Update the hue, keeping the saturation and lightness of the current
    /// color.
    pub fn set_hue(&mut self, value: i64) {
        let hsl = Hsl::from(self.color);
        self.set_color(Hsl::clamped(value, hsl.s() as i64, hsl.l() as i64).into());
    }

    /// Update the saturation, keeping the hue and lightness.
    pub fn set_saturation(&mut self, value: i64) {
        let hsl = Hsl::from(self.color);
        self.set_color(Hsl::clamped(hsl.h() as i64, value, hsl.l() as i64).into());
    }

    /// Update the lightness, keeping the hue and saturation.
    pub fn set_lightness(&mut self, value: i64) {
        let hsl = Hsl::from(self.color);
        self.set_color(hsl.with_lightness(value).into());
    }

    /// Update the alpha, clamping it to `0..=1`.
    pub fn set_alpha(&mut self, value: Float) {
        self.alpha = clamp_alpha(value);
    }

    /// Add the current color to the favorites or remove it. This method
    /// returns whether the color is a favorite afterwards.
    pub fn toggle_favorite(&mut self) -> bool {
        let color = self.color;
        let before = self.favorites.len();
        self.favorites.retain(|c| *c != color);
        if before == self.favorites.len() {
            self.favorites.push(color);
            true
        } else {
            false
        }
    }

    /// Determine whether the given color is a favorite.
    pub fn is_favorite(&self, color: Rgb) -> bool {
        self.favorites.contains(&color)
    }

    /// Compute everything the color tool displays for the current color.
    pub fn report(&self) -> ColorReport {
        ColorReport {
            formats: ColorFormats::new(self.color, self.alpha),
            hsl: Hsl::from(self.color),
            hsv: Hsv::from(self.color),
            cmyk: Cmyk::from(self.color),
            palette: generate_palette(self.color),
            name: closest_color_name(self.color),
        }
    }

    /// Restore this state's invariants after deserialization.
    fn repair(&mut self) {
        self.alpha = clamp_alpha(self.alpha);
        dedup_in_order(&mut self.history);
        self.set_color(self.color);
        dedup_in_order(&mut self.favorites);
    }
}

/// Remove repeated elements, keeping the first occurrence of each.
fn dedup_in_order<T: PartialEq + Clone>(items: &mut Vec<T>) {
    let mut seen: Vec<T> = Vec::with_capacity(items.len());
    items.retain(|item| {
        if seen.contains(item) {
            false
        } else {
            seen.push(item.clone());
            true
        }
    });
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(Rgb::new(30, 136, 229))
    }
}

/// The derived data for a color.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorReport {
    /// The display strings.
    pub formats: ColorFormats,
    /// The color in HSL.
    pub hsl: Hsl,
    /// The color in HSV.
    pub hsv: Hsv,
    /// The color in CMYK.
    pub cmyk: Cmyk,
    /// The tints and shades, lightest first.
    pub palette: [Rgb; PALETTE_SIZE],
    /// The closest named color.
    pub name: &'static str,
}

// ====================================================================================================================
// Shadow Library
// ====================================================================================================================

/// A saved box shadow.
///
/// The CSS and Tailwind renditions are computed once upon creation, since
/// built-in presets may carry hand-tuned text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowPreset {
    #[serde(default)]
    id: String,
    name: String,
    tailwind: String,
    css: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dark_tailwind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dark_css: Option<String>,
    layers: BoxShadow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dark_layers: Option<BoxShadow>,
    #[serde(default)]
    is_custom: bool,
}

impl ShadowPreset {
    /// Create a new, custom shadow preset. Its id is assigned when it is added
    /// to a [`ShadowLibrary`].
    pub fn new(name: &str, layers: BoxShadow) -> Self {
        Self {
            id: String::new(),
            name: name.to_owned(),
            tailwind: layers.to_tailwind(),
            css: layers.to_css(),
            dark_tailwind: None,
            dark_css: None,
            layers,
            dark_layers: None,
            is_custom: true,
        }
    }

    /// Add layers for dark mode.
    #[must_use = "method returns a new preset and does not mutate the original value"]
    pub fn with_dark(&self, layers: BoxShadow) -> Self {
        Self {
            dark_tailwind: Some(layers.to_tailwind()),
            dark_css: Some(layers.to_css()),
            dark_layers: Some(layers),
            ..self.clone()
        }
    }

    /// Get the id, which is empty until the preset is added to a library.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the Tailwind class.
    pub fn tailwind(&self) -> &str {
        &self.tailwind
    }

    /// Get the value of the `box-shadow` property.
    pub fn css(&self) -> &str {
        &self.css
    }

    /// Get the Tailwind class for dark mode.
    pub fn dark_tailwind(&self) -> Option<&str> {
        self.dark_tailwind.as_deref()
    }

    /// Get the value of the `box-shadow` property for dark mode.
    pub fn dark_css(&self) -> Option<&str> {
        self.dark_css.as_deref()
    }

    /// Get the layers.
    pub fn layers(&self) -> &BoxShadow {
        &self.layers
    }

    /// Get the layers for dark mode.
    pub fn dark_layers(&self) -> Option<&BoxShadow> {
        self.dark_layers.as_ref()
    }

    /// Determine whether this preset was created by the user.
    pub fn is_custom(&self) -> bool {
        self.is_custom
    }

    /// Render the CSS and Tailwind text from the layers again.
    fn render(&mut self) {
        self.tailwind = self.layers.to_tailwind();
        self.css = self.layers.to_css();
        self.dark_tailwind = self.dark_layers.as_ref().map(BoxShadow::to_tailwind);
        self.dark_css = self.dark_layers.as_ref().map(BoxShadow::to_css);
    }
}

/// The saved shadow presets and the ids of favorite presets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowLibrary {
    saved_shadows: Vec<ShadowPreset>,
    favorites: Vec<String>,
    #[serde(default)]
    next_id: u64,
}

impl ShadowLibrary {
    /// Create a new, empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the saved presets, in order of addition.
    pub fn presets(&self) -> &[ShadowPreset] {
        &self.saved_shadows
    }

    /// Look up the preset with the given id.
    pub fn get(&self, id: &str) -> Option<&ShadowPreset> {
        self.saved_shadows.iter().find(|p| p.id == id)
    }

    /// Add the preset, returning its freshly assigned id.
    pub fn add(&mut self, preset: ShadowPreset) -> String {
        let id = loop {
            self.next_id = self.next_id.wrapping_add(1);
            let id = format!("shadow-{}", self.next_id);
            if self.get(&id).is_none() {
                break id;
            }
        };

        self.saved_shadows.push(ShadowPreset {
            id: id.clone(),
            ..preset
        });
        id
    }

    /// Replace the preset with the given id, keeping the id. This method
    /// returns whether the preset exists.
    pub fn update(&mut self, id: &str, preset: ShadowPreset) -> bool {
        let Some(slot) = self.saved_shadows.iter_mut().find(|p| p.id == id) else {
            return false;
        };

        *slot = ShadowPreset {
            id: id.to_owned(),
            ..preset
        };
        true
    }

    /// Delete the preset with the given id, also dropping it from the
    /// favorites. This method returns whether the preset existed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.saved_shadows.len();
        self.saved_shadows.retain(|p| p.id != id);
        self.favorites.retain(|f| f != id);
        before != self.saved_shadows.len()
    }

    /// Toggle whether the preset with the given id is a favorite. This method
    /// returns whether it is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|f| f != id);
        if before == self.favorites.len() {
            self.favorites.push(id.to_owned());
            true
        } else {
            false
        }
    }

    /// Determine whether the preset with the given id is a favorite.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    /// Get the favorite presets.
    pub fn favorites(&self) -> impl Iterator<Item = &ShadowPreset> {
        self.saved_shadows
            .iter()
            .filter(|p| self.is_favorite(&p.id))
    }

    /// Restore this library's invariants after deserialization. Custom presets
    /// are rendered again from their layers, presets with missing or repeated
    /// ids get fresh ones, and favorites name distinct, existing presets.
    fn repair(&mut self) {
        let mut orphans = Vec::new();
        for mut preset in std::mem::take(&mut self.saved_shadows) {
            if preset.is_custom {
                preset.render();
            }
            if preset.id.is_empty() || self.get(&preset.id).is_some() {
                orphans.push(preset);
            } else {
                self.saved_shadows.push(preset);
            }
        }

        for preset in orphans {
            log::debug!("assigning fresh id to stored shadow {:?}", preset.name);
            self.add(preset);
        }

        dedup_in_order(&mut self.favorites);
        let favorites = std::mem::take(&mut self.favorites);
        self.favorites = favorites
            .into_iter()
            .filter(|id| self.get(id).is_some())
            .collect();
    }
}

// ====================================================================================================================
// Application State
// ====================================================================================================================

/// Light or dark mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Get the other appearance.
    #[must_use = "method returns a new appearance and does not mutate the original value"]
    pub const fn toggle(&self) -> Self {
        match *self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// The storage key for the appearance.
pub const APPEARANCE_KEY: &str = "colorlab.appearance";
/// The storage key for the color state.
pub const COLOR_KEY: &str = "colorlab.color";
/// The storage key for the shadow library.
pub const SHADOWS_KEY: &str = "colorlab.shadows";

/// The application state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    appearance: Appearance,
    color: ColorState,
    shadows: ShadowLibrary,
}

impl AppState {
    /// Get the appearance.
    pub const fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Update the appearance.
    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    /// Get the color tool's state.
    pub const fn color(&self) -> &ColorState {
        &self.color
    }

    /// Get mutable access to the color tool's state.
    pub fn color_mut(&mut self) -> &mut ColorState {
        &mut self.color
    }

    /// Get the shadow library.
    pub const fn shadows(&self) -> &ShadowLibrary {
        &self.shadows
    }

    /// Get mutable access to the shadow library.
    pub fn shadows_mut(&mut self) -> &mut ShadowLibrary {
        &mut self.shadows
    }

    /// Load the state from the given store.
    ///
    /// Missing entries fall back to their defaults. So do entries that fail
    /// to deserialize, which are logged as warnings. Out-of-range values are
    /// repaired.
    pub fn load<S: Store + ?Sized>(store: &S) -> Self {
        let mut color: ColorState = load_entry(store, COLOR_KEY);
        color.repair();
        let mut shadows: ShadowLibrary = load_entry(store, SHADOWS_KEY);
        shadows.repair();

        Self {
            appearance: load_entry(store, APPEARANCE_KEY),
            color,
            shadows,
        }
    }

    /// Save the state to the given store.
    pub fn save<S: Store + ?Sized>(&self, store: &mut S) -> Result<(), StateError> {
        save_entry(store, APPEARANCE_KEY, &self.appearance)?;
        save_entry(store, COLOR_KEY, &self.color)?;
        save_entry(store, SHADOWS_KEY, &self.shadows)
    }

    /// Remove the state from the given store.
    pub fn clear<S: Store + ?Sized>(store: &mut S) {
        for key in [APPEARANCE_KEY, COLOR_KEY, SHADOWS_KEY] {
            store.delete(key);
        }
    }
}

fn load_entry<S: Store + ?Sized, T: DeserializeOwned + Default>(store: &S, key: &str) -> T {
    let Some(payload) = store.get(key) else {
        return T::default();
    };

    match serde_json::from_str(&payload) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("{}: {}", StateError::new(key, err), payload);
            T::default()
        }
    }
}

fn save_entry<S: Store + ?Sized, T: Serialize>(
    store: &mut S,
    key: &str,
    value: &T,
) -> Result<(), StateError> {
    let payload = serde_json::to_string(value).map_err(|err| StateError::new(key, err))?;
    store.set(key, payload);
    Ok(())
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        AppState, Appearance, ColorState, MemoryStore, ShadowLibrary, ShadowPreset, Store,
        COLOR_KEY, HISTORY_LIMIT, SHADOWS_KEY,
    };
    use crate::css::{BoxShadow, ShadowLayer};
    use crate::{ColorFormatError, Rgb};

    #[test]
    fn test_history() {
        let mut state = ColorState::default();
        assert_eq!(state.history(), &[Rgb::new(30, 136, 229)]);

        for value in 0..15 {
            state.set_red(value);
        }
        assert_eq!(state.history().len(), HISTORY_LIMIT);
        assert_eq!(state.history()[0], Rgb::new(14, 136, 229));
        assert_eq!(state.history()[9], Rgb::new(5, 136, 229));

        // Revisiting a color moves it to the front without duplicating it.
        state.set_red(9);
        assert_eq!(state.history().len(), HISTORY_LIMIT);
        assert_eq!(state.history()[0], Rgb::new(9, 136, 229));
        assert_eq!(state.history()[1], Rgb::new(14, 136, 229));
    }

    #[test]
    fn test_setters() -> Result<(), ColorFormatError> {
        let mut state = ColorState::default();

        state.set_green(300);
        state.set_blue(-4);
        assert_eq!(state.color(), Rgb::new(30, 255, 0));

        state.set_hex("#FF0000")?;
        state.set_hue(120);
        assert_eq!(state.color(), Rgb::new(0, 255, 0));
        state.set_lightness(25);
        assert_eq!(state.color(), Rgb::new(0, 128, 0));
        state.set_saturation(0);
        assert_eq!(state.color(), Rgb::new(64, 64, 64));

        state.set_alpha(1.5);
        assert_eq!(state.alpha(), 1.0);
        state.set_alpha(-0.5);
        assert_eq!(state.alpha(), 0.0);

        assert_eq!(state.set_hex("#12"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(state.color(), Rgb::new(64, 64, 64));
        Ok(())
    }

    #[test]
    fn test_apply_input() -> Result<(), ColorFormatError> {
        let mut state = ColorState::new(Rgb::new(0, 0, 0));

        let detection = state.apply_input("rgba(30,136,229,0.5)")?;
        assert_eq!(detection.rgb(), Rgb::new(30, 136, 229));
        assert_eq!(state.color().to_string(), "#1e88e5");
        assert_eq!(state.alpha(), 0.5);

        let before = state.clone();
        assert_eq!(
            state.apply_input("notacolor").err(),
            Some(ColorFormatError::UnknownFormat)
        );
        assert_eq!(state, before);
        Ok(())
    }

    #[test]
    fn test_report() {
        let mut state = ColorState::default();
        state.set_alpha(0.5);
        let report = state.report();

        assert_eq!(report.formats.hex, "#1e88e5");
        assert_eq!(report.formats.rgba, "rgba(30, 136, 229, 0.50)");
        assert_eq!(report.hsl.h(), 208);
        assert_eq!(report.hsv.v(), 90);
        assert_eq!(report.cmyk.components(), [87, 41, 0, 10]);
        assert_eq!(report.palette[9], state.color());
        assert_eq!(report.name, "Teal");
    }

    #[test]
    fn test_favorite_colors() {
        let mut state = ColorState::default();
        let color = state.color();
        assert!(state.toggle_favorite());
        assert!(state.is_favorite(color));
        assert!(!state.toggle_favorite());
        assert!(!state.is_favorite(color));
    }

    #[test]
    fn test_shadow_library() {
        let mut library = ShadowLibrary::new();
        let soft = ShadowPreset::new(
            "soft",
            BoxShadow::new(vec![ShadowLayer::new(0, 1, 3, 0).with_opacity(10)]),
        );
        assert_eq!(soft.css(), "0px 1px 3px 0px rgba(0, 0, 0, 0.1)");

        let id1 = library.add(soft.clone());
        let id2 = library.add(soft.with_dark(BoxShadow::default()));
        assert_ne!(id1, id2);
        assert_eq!(library.presets().len(), 2);
        assert_eq!(library.get(&id2).and_then(ShadowPreset::dark_css), Some(""));

        assert!(library.toggle_favorite(&id1));
        assert!(library.is_favorite(&id1));
        assert_eq!(library.favorites().count(), 1);

        let hard = ShadowPreset::new("hard", BoxShadow::new(vec![ShadowLayer::new(2, 2, 0, 0)]));
        assert!(library.update(&id1, hard));
        assert_eq!(library.get(&id1).map(ShadowPreset::name), Some("hard"));
        assert!(!library.update("nope", soft));

        assert!(library.delete(&id1));
        assert!(!library.is_favorite(&id1));
        assert!(!library.delete(&id1));
        assert_eq!(library.presets().len(), 1);

        // Ids are never reused.
        let id3 = library.add(ShadowPreset::new("again", BoxShadow::default()));
        assert_ne!(id3, id1);
    }

    #[test]
    fn test_load_and_save() -> Result<(), crate::error::StateError> {
        let mut store = MemoryStore::new();
        assert_eq!(AppState::load(&store), AppState::default());

        let mut state = AppState::default();
        state.set_appearance(Appearance::Light.toggle());
        state.color_mut().set_color(Rgb::new(0xab, 0xcd, 0xef));
        state.color_mut().toggle_favorite();
        state.shadows_mut().add(ShadowPreset::new(
            "inner",
            BoxShadow::new(vec![ShadowLayer::new(0, 2, 4, 0).inset().hidden()]),
        ));
        state.save(&mut store)?;
        assert_eq!(store.len(), 3);

        let restored = AppState::load(&store);
        assert_eq!(restored, state);
        assert_eq!(restored.appearance(), Appearance::Dark);

        AppState::clear(&mut store);
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_malformed() {
        let mut store = MemoryStore::new();
        store.set(COLOR_KEY, "{\"color\": 42}".to_owned());
        store.set(SHADOWS_KEY, "[".to_owned());
        assert_eq!(AppState::load(&store), AppState::default());

        // Out-of-range stored values are repaired.
        store.set(
            COLOR_KEY,
            r##"{"color":"#ff0000","alpha":3.0,"history":["#00ff00","#00ff00"]}"##.to_owned(),
        );
        let state = AppState::load(&store);
        assert_eq!(state.color().alpha(), 1.0);
        assert_eq!(
            state.color().history(),
            &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]
        );
    }

    #[test]
    fn test_load_repeated_favorites() {
        let mut store = MemoryStore::new();
        store.set(
            COLOR_KEY,
            r##"{"color":"#ff0000","alpha":1.0,"history":["#ff0000"],
                "favorites":["#ff0000","#00ff00","#ff0000"]}"##
                .to_owned(),
        );

        let mut state = AppState::load(&store);
        let red = Rgb::new(255, 0, 0);
        assert_eq!(state.color().favorites(), &[red, Rgb::new(0, 255, 0)]);

        assert!(!state.color_mut().toggle_favorite());
        assert!(!state.color().is_favorite(red));
    }

    #[test]
    fn test_load_shadows() {
        let mut store = MemoryStore::new();
        store.set(
            SHADOWS_KEY,
            r##"{"savedShadows":[
                {"id":"shadow-1","name":"loud","tailwind":"stale","css":"stale","isCustom":true,
                 "layers":[{"offsetX":0,"offsetY":1,"blur":3,"spread":0,
                            "color":"#000000","opacity":250}]},
                {"id":"shadow-1","name":"twin","tailwind":"","css":"","layers":[]}
            ],"favorites":["shadow-1","shadow-1","shadow-9"],"nextId":1}"##
                .to_owned(),
        );

        let state = AppState::load(&store);
        let library = state.shadows();
        assert_eq!(library.presets().len(), 2);

        let loud = &library.presets()[0];
        assert_eq!(loud.id(), "shadow-1");
        assert_eq!(loud.layers().layers()[0].opacity(), 100);
        assert_eq!(loud.css(), "0px 1px 3px 0px rgba(0, 0, 0, 1)");
        assert_eq!(loud.tailwind(), "shadow-[0px_1px_3px_0px_#000000]");

        let twin = &library.presets()[1];
        assert_eq!(twin.name(), "twin");
        assert_eq!(twin.id(), "shadow-2");

        assert_eq!(library.favorites().count(), 1);
        assert!(library.is_favorite("shadow-1"));
        assert!(!library.is_favorite("shadow-9"));
    }

    #[test]
    fn test_exhausted_shadow_ids() {
        let mut store = MemoryStore::new();
        store.set(
            SHADOWS_KEY,
            r#"{"savedShadows":[],"favorites":[],"nextId":18446744073709551615}"#.to_owned(),
        );

        let mut state = AppState::load(&store);
        let id = state
            .shadows_mut()
            .add(ShadowPreset::new("wrapped", BoxShadow::default()));
        assert_eq!(id, "shadow-0");
    }
}
