//! Pixel-Geometrie: Rechtecke, Hit-Tests und Grid-Snapping.

use glam::IVec2;

/// Achsenparalleles Rechteck in Pixel-Koordinaten (Ursprung oben links).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Linke obere Ecke
    pub origin: IVec2,
    /// Breite und Höhe
    pub size: IVec2,
}

impl Rect {
    /// Erstellt ein Rechteck aus Position und Größe.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// Erstellt ein Rechteck aus Ursprung und Größe.
    pub const fn from_origin_size(origin: IVec2, size: IVec2) -> Self {
        Self { origin, size }
    }

    /// X-Koordinate der linken Kante.
    pub fn x(&self) -> i32 {
        self.origin.x
    }

    /// Y-Koordinate der oberen Kante.
    pub fn y(&self) -> i32 {
        self.origin.y
    }

    /// Breite in Pixeln.
    pub fn width(&self) -> i32 {
        self.size.x
    }

    /// Höhe in Pixeln.
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Rechte untere Ecke (exklusiv), am Rand des `i32`-Bereichs gesättigt.
    pub fn max(&self) -> IVec2 {
        self.origin.saturating_add(self.size)
    }

    /// Mittelpunkt (ganzzahlig abgerundet).
    pub fn center(&self) -> IVec2 {
        self.origin.saturating_add(self.size / 2)
    }

    /// Halboffener Containment-Test: `x <= px < x + w` (analog für y).
    ///
    /// Leere oder negative Rechtecke enthalten keinen Punkt.
    pub fn contains(&self, point: IVec2) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.x < max.x && point.y >= self.origin.y && point.y < max.y
    }
}

/// Rastet eine Position auf die nächstkleinere Grid-Linie ein.
///
/// Verwendet floored Modulo (`rem_euclid`), damit auch negative Koordinaten
/// konsistent nach links/oben einrasten: bei Abstand 15 wird -7 zu -15.
/// Bei nicht-positivem Abstand bleibt die Position unverändert.
pub fn snap_to_grid(position: IVec2, spacing: i32) -> IVec2 {
    if spacing <= 0 {
        return position;
    }
    IVec2::new(
        position.x.saturating_sub(position.x.rem_euclid(spacing)),
        position.y.saturating_sub(position.y.rem_euclid(spacing)),
    )
}

/// Berechnet das Link-Tag-Rechteck eines Bricks.
///
/// Das Tag ist ein Quadrat der Kantenlänge `size`, das außen an der linken
/// oberen Ecke der Brick-Bounds sitzt, um `margin` Pixel nach außen versetzt.
pub fn link_tag_rect(brick_bounds: Rect, size: i32, margin: i32) -> Rect {
    let offset = margin.saturating_add(size);
    Rect::new(
        brick_bounds.x().saturating_sub(offset),
        brick_bounds.y().saturating_sub(offset),
        size,
        size,
    )
}
