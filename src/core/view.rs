//! View-Transformation zwischen Bild- und Screen-Koordinaten.

use glam::Vec2;

/// Abbildung Bildraum → Screenraum: `screen = image * scale + offset`.
///
/// Die Engine rastert nichts selbst; die Transformation wird nur gebraucht,
/// um Screen-Toleranzen (Grab-Radius in Pixeln) zoominvariant in den
/// Bildraum umzurechnen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Zoom-Faktor (Screen-Pixel pro Bild-Einheit)
    pub scale: f32,
    /// Pan-Offset in Screen-Pixeln
    pub offset: Vec2,
}

impl ViewTransform {
    /// Identitätstransformation (Zoom 1.0, kein Pan).
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Erstellt eine Transformation aus Zoom und Pan.
    pub fn new(scale: f32, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    fn effective_scale(&self) -> f32 {
        // Degenerierte Transformationen nicht durch 0 teilen lassen
        self.scale.max(f32::EPSILON)
    }

    /// Konvertiert Screen- zu Bildkoordinaten.
    pub fn screen_to_image(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.offset) / self.effective_scale()
    }

    /// Konvertiert Bild- zu Screen-Koordinaten.
    pub fn image_to_screen(&self, image_pos: Vec2) -> Vec2 {
        image_pos * self.scale + self.offset
    }

    /// Rechnet einen Pixel-Radius in Bild-Einheiten um.
    ///
    /// Dadurch bleibt die Grab-Sensitivität beim Zoomen konstant: derselbe
    /// Screen-Abstand trifft bei jedem Zoom-Level.
    pub fn pixels_to_image(&self, pixels: f32) -> f32 {
        pixels / self.effective_scale()
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}
