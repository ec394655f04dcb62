use super::PointerEvent;
use crate::shared::DesignerOptions;

/// Intents sind Eingaben aus Shell/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignerIntent {
    /// Rohes Zeiger-Event der Zeichenfläche
    Pointer(PointerEvent),
    /// Grid-Snapping umschalten
    GridSnapToggled,
    /// Grid-Snapping explizit setzen
    GridSnapSet { enabled: bool },
    /// Rasterabstand ändern
    GridSpacingChanged { spacing: i32 },
    /// Alle Optionen auf einmal übernehmen
    OptionsChanged { options: DesignerOptions },
    /// Bearbeitung sperren
    LockRequested,
    /// Bearbeitung entsperren
    UnlockRequested,
    /// Selektierten Brick löschen
    RemoveSelectedRequested,
    /// Selektion aufheben
    ClearSelectionRequested,
}
