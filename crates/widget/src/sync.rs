//! Propagates the authoritative color to every display field and back.
//!
//! The [`Synchronizer`] owns one canonical RGB triple. Whenever it changes
//! (wheel click, slider drag, text edit, preset swatch), every derived
//! display is rewritten from the triple in one pass, so the
//! representations can never drift apart.
//!
//! Malformed text input is discarded without touching any state; the
//! reason is logged at debug level and the page shows its previous values.

use color_wheel_core::{parse_color, rgb_to_hsl, rgb_to_hsv, ColorFormat, Rgb};

/// Write access to the widget's display fields.
///
/// Every method defaults to a no-op, so an embedding that lacks one of the
/// elements (a page with only a swatch, say) implements just the slots it
/// has and the synchronizer stays safely usable.
pub trait DisplaySlots {
    /// Positions the three channel sliders and their numeric labels.
    fn set_sliders(&mut self, _rgb: Rgb) {}

    /// Writes the HEX text field (uppercase, `#`-prefixed).
    fn set_hex_text(&mut self, _hex: &str) {}

    /// Writes the HSL text field (`"h, s%, l%"`).
    fn set_hsl_text(&mut self, _text: &str) {}

    /// Writes the HSV text field (`"h, s%, v%"`).
    fn set_hsv_text(&mut self, _text: &str) {}

    /// Sets the preview swatch to the given hex color.
    fn set_swatch(&mut self, _hex: &str) {}
}

/// In-memory slots recording the last value written to each field.
///
/// Used by unit tests and the CLI; `None` means the field has never been
/// written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySlots {
    pub sliders: Option<Rgb>,
    pub hex: Option<String>,
    pub hsl: Option<String>,
    pub hsv: Option<String>,
    pub swatch: Option<String>,
}

impl DisplaySlots for MemorySlots {
    fn set_sliders(&mut self, rgb: Rgb) {
        self.sliders = Some(rgb);
    }

    fn set_hex_text(&mut self, hex: &str) {
        self.hex = Some(hex.to_string());
    }

    fn set_hsl_text(&mut self, text: &str) {
        self.hsl = Some(text.to_string());
    }

    fn set_hsv_text(&mut self, text: &str) {
        self.hsv = Some(text.to_string());
    }

    fn set_swatch(&mut self, hex: &str) {
        self.swatch = Some(hex.to_string());
    }
}

/// Single source of truth for the selected color.
///
/// Holds the canonical RGB triple and the display slots it drives.
#[derive(Debug, Clone)]
pub struct Synchronizer<S: DisplaySlots> {
    slots: S,
    color: Rgb,
}

impl<S: DisplaySlots> Synchronizer<S> {
    /// Creates a synchronizer over the given slots.
    ///
    /// The color starts at black; no slot is written until the first
    /// propagation.
    pub fn new(slots: S) -> Self {
        Self {
            slots,
            color: Rgb::BLACK,
        }
    }

    /// The authoritative color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Read access to the slots.
    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Consumes the synchronizer and returns its slots.
    pub fn into_slots(self) -> S {
        self.slots
    }

    /// Makes `rgb` authoritative and rewrites every display field from it.
    pub fn set_color(&mut self, rgb: Rgb) {
        self.color = rgb;
        let hex = rgb.to_hex();
        let hsl = rgb_to_hsl(rgb);
        let hsv = rgb_to_hsv(rgb);

        self.slots.set_sliders(rgb);
        self.slots.set_hex_text(&hex);
        self.slots
            .set_hsl_text(&format!("{}, {}%, {}%", hsl.h, hsl.s, hsl.l));
        self.slots
            .set_hsv_text(&format!("{}, {}%, {}%", hsv.h, hsv.s, hsv.v));
        self.slots.set_swatch(&hex);
    }

    /// Reverse propagation from raw slider values.
    pub fn set_from_sliders(&mut self, r: u8, g: u8, b: u8) {
        self.set_color(Rgb { r, g, b });
    }

    /// Reverse propagation from a text-field edit tagged with its format.
    ///
    /// On success the parsed color becomes authoritative and is returned.
    /// Malformed input returns `None` and changes nothing; the failure is
    /// logged at debug level only, never surfaced.
    pub fn set_from_text(&mut self, format: ColorFormat, text: &str) -> Option<Rgb> {
        match parse_color(format, text) {
            Ok(rgb) => {
                self.set_color(rgb);
                Some(rgb)
            }
            Err(e) => {
                log::debug!("discarding {format} input {text:?}: {e}");
                None
            }
        }
    }

    /// Applies a preset palette color given as a hex string.
    ///
    /// Routes through the same text path as a HEX field edit, so invalid
    /// presets are discarded identically.
    pub fn set_hex(&mut self, hex: &str) -> Option<Rgb> {
        self.set_from_text(ColorFormat::Hex, hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synced(rgb: Rgb) -> Synchronizer<MemorySlots> {
        let mut sync = Synchronizer::new(MemorySlots::default());
        sync.set_color(rgb);
        sync
    }

    // ── Forward propagation ────────────────────────────────────────

    #[test]
    fn new_does_not_touch_slots() {
        let sync = Synchronizer::new(MemorySlots::default());
        assert_eq!(*sync.slots(), MemorySlots::default());
        assert_eq!(sync.color(), Rgb::BLACK);
    }

    #[test]
    fn set_color_writes_every_slot() {
        let sync = synced(Rgb { r: 0, g: 255, b: 0 });
        let slots = sync.slots();
        assert_eq!(slots.sliders, Some(Rgb { r: 0, g: 255, b: 0 }));
        assert_eq!(slots.hex.as_deref(), Some("#00FF00"));
        assert_eq!(slots.hsl.as_deref(), Some("120, 100%, 50%"));
        assert_eq!(slots.hsv.as_deref(), Some("120, 100%, 100%"));
        assert_eq!(slots.swatch.as_deref(), Some("#00FF00"));
    }

    #[test]
    fn swatch_receives_the_hex_string() {
        let sync = synced(Rgb { r: 18, g: 52, b: 86 });
        assert_eq!(sync.slots().swatch, sync.slots().hex);
    }

    #[test]
    fn set_from_sliders_propagates() {
        let mut sync = Synchronizer::new(MemorySlots::default());
        sync.set_from_sliders(255, 128, 0);
        assert_eq!(sync.color(), Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(sync.slots().hex.as_deref(), Some("#FF8000"));
    }

    // ── Reverse propagation from text ──────────────────────────────

    #[test]
    fn set_from_text_hex_updates_all() {
        let mut sync = Synchronizer::new(MemorySlots::default());
        let color = sync.set_from_text(ColorFormat::Hex, "#FF0000").unwrap();
        assert_eq!(color, Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(sync.slots().hsl.as_deref(), Some("0, 100%, 50%"));
    }

    #[test]
    fn set_from_text_rgb() {
        let mut sync = Synchronizer::new(MemorySlots::default());
        let color = sync.set_from_text(ColorFormat::Rgb, "0, 0, 255").unwrap();
        assert_eq!(color, Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn set_from_text_hsl_percent() {
        let mut sync = Synchronizer::new(MemorySlots::default());
        let color = sync
            .set_from_text(ColorFormat::Hsl, "120, 100%, 50%")
            .unwrap();
        assert_eq!(color, Rgb { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn set_from_text_hsv() {
        let mut sync = Synchronizer::new(MemorySlots::default());
        let color = sync
            .set_from_text(ColorFormat::Hsv, "240, 100%, 100%")
            .unwrap();
        assert_eq!(color, Rgb { r: 0, g: 0, b: 255 });
    }

    // ── Malformed input is discarded ───────────────────────────────

    #[test]
    fn malformed_hex_leaves_everything_unchanged() {
        let mut sync = synced(Rgb { r: 0, g: 255, b: 0 });
        let before_slots = sync.slots().clone();
        let before_color = sync.color();

        assert_eq!(sync.set_from_text(ColorFormat::Hex, "zzzzzz"), None);

        assert_eq!(*sync.slots(), before_slots);
        assert_eq!(sync.color(), before_color);
    }

    #[test]
    fn malformed_rgb_and_hsl_are_discarded() {
        let mut sync = synced(Rgb::WHITE);
        assert_eq!(sync.set_from_text(ColorFormat::Rgb, "1, 2"), None);
        assert_eq!(sync.set_from_text(ColorFormat::Hsl, "a, b%, c%"), None);
        assert_eq!(sync.slots().hex.as_deref(), Some("#FFFFFF"));
    }

    // ── Preset palette path ────────────────────────────────────────

    #[test]
    fn set_hex_applies_preset() {
        let mut sync = Synchronizer::new(MemorySlots::default());
        let color = sync.set_hex("#804020").unwrap();
        assert_eq!(color, Rgb { r: 128, g: 64, b: 32 });
        assert_eq!(sync.slots().swatch.as_deref(), Some("#804020"));
    }

    #[test]
    fn set_hex_discards_invalid_preset() {
        let mut sync = synced(Rgb::BLACK);
        assert_eq!(sync.set_hex("not-a-color"), None);
        assert_eq!(sync.color(), Rgb::BLACK);
    }

    // ── Partial embeddings ─────────────────────────────────────────

    /// A page that only has the preview swatch.
    #[derive(Default)]
    struct SwatchOnly {
        swatch: Option<String>,
    }

    impl DisplaySlots for SwatchOnly {
        fn set_swatch(&mut self, hex: &str) {
            self.swatch = Some(hex.to_string());
        }
    }

    #[test]
    fn missing_slots_exit_quietly() {
        let mut sync = Synchronizer::new(SwatchOnly::default());
        sync.set_color(Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(sync.slots().swatch.as_deref(), Some("#FF0000"));
    }

    // ── Wheel click to displays, end to end ────────────────────────

    #[test]
    fn wheel_click_drives_every_display() {
        let mut raster = crate::raster::Raster::new(200, 200).unwrap();
        let geometry = crate::renderer::draw_wheel(&mut raster).unwrap();
        let mut picker = crate::picker::WheelPicker::new(geometry);

        // Rim point directly right of center: pure red.
        let rgb = picker.pick(glam::DVec2::new(195.0, 100.0)).unwrap();
        let mut sync = Synchronizer::new(MemorySlots::default());
        sync.set_color(rgb);

        assert!(picker.marker().visible());
        let slots = sync.slots();
        assert_eq!(slots.sliders, Some(Rgb { r: 255, g: 0, b: 0 }));
        assert_eq!(slots.hex.as_deref(), Some("#FF0000"));
        assert_eq!(slots.hsl.as_deref(), Some("0, 100%, 50%"));
        assert_eq!(slots.hsv.as_deref(), Some("0, 100%, 100%"));
        assert_eq!(slots.swatch.as_deref(), Some("#FF0000"));
    }

    // ── Round trip through displayed text ──────────────────────────

    #[test]
    fn displayed_hex_feeds_back_exactly() {
        let mut sync = synced(Rgb { r: 18, g: 52, b: 86 });
        let displayed = sync.slots().hex.clone().unwrap();
        let color = sync.set_from_text(ColorFormat::Hex, &displayed).unwrap();
        assert_eq!(color, Rgb { r: 18, g: 52, b: 86 });
    }

    #[test]
    fn displayed_hsl_feeds_back_within_quantization() {
        let original = Rgb { r: 200, g: 90, b: 40 };
        let mut sync = synced(original);
        let displayed = sync.slots().hsl.clone().unwrap();
        let back = sync.set_from_text(ColorFormat::Hsl, &displayed).unwrap();
        assert!(
            back.r.abs_diff(original.r) <= 6
                && back.g.abs_diff(original.g) <= 6
                && back.b.abs_diff(original.b) <= 6,
            "{original:?} redisplayed as {back:?}"
        );
    }
}
