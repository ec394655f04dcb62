use super::ContextMenuRequest;
use crate::app::interaction::InteractionState;
use crate::core::BrickId;
use crate::shared::DesignerOptions;
use glam::IVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignerCommand {
    // ── Selektion ───────────────────────────────────────────────
    /// Brick selektieren
    SelectBrick { brick: BrickId },
    /// Selektion aufheben
    ClearSelection,

    // ── Editing ─────────────────────────────────────────────────
    /// Brick an neue linke obere Ecke verschieben
    MoveBrick { brick: BrickId, position: IVec2 },
    /// Zwei Bricks verbinden (Ablehnung ist kein Fehler)
    Connect { a: BrickId, b: BrickId },
    /// Verbindung zweier Bricks trennen
    Disconnect { a: BrickId, b: BrickId },
    /// Selektierten Brick inklusive aller Verbindungen löschen
    RemoveSelectedBrick,

    // ── Interaktion ─────────────────────────────────────────────
    /// Zustand der Interaktions-State-Machine setzen
    SetInteraction { state: InteractionState },
    /// Aktuelle Zeigerposition merken (`None` = außerhalb)
    UpdatePointer { position: Option<IVec2> },
    /// Kontextmenü bei der Shell anfordern
    ShowContextMenu { request: ContextMenuRequest },
    /// Neuzeichnen anfordern
    RequestRedraw,

    // ── Optionen ────────────────────────────────────────────────
    /// Grid-Snapping setzen
    SetGridSnap { enabled: bool },
    /// Rasterabstand setzen
    SetGridSpacing { spacing: i32 },
    /// Optionen übernehmen
    ApplyOptions { options: DesignerOptions },
}
