use crate::core::BrickId;
use glam::IVec2;

/// Welches Kontextmenü die Shell öffnen soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuRequest {
    /// Menü für leere Fläche (z.B. "Brick hinzufügen")
    EmptySpace { position: IVec2 },
    /// Menü eines Bricks, dessen Art ein eigenes Kontextmenü anbietet
    Brick { brick: BrickId, position: IVec2 },
}

impl ContextMenuRequest {
    /// Zeigerposition, an der das Menü geöffnet werden soll.
    pub fn position(&self) -> IVec2 {
        match *self {
            Self::EmptySpace { position } | Self::Brick { position, .. } => position,
        }
    }
}

/// Anfrage des Cores an die Präsentationsschicht (fire-and-forget).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellRequest {
    /// Neu zeichnen; die Shell fragt den aktuellen Zustand selbst ab
    Redraw,
    /// Kontextmenü anzeigen
    ContextMenu(ContextMenuRequest),
}
