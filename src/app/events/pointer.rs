use glam::IVec2;

/// Art eines rohen Zeiger-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Taste gedrückt
    Pressed,
    /// Taste losgelassen
    Released,
    /// Klick (Drücken + Loslassen ohne Bewegung)
    Clicked,
    /// Bewegung ohne gedrückte Taste
    Moved,
    /// Bewegung mit gedrückter Taste
    Dragged,
    /// Zeiger hat die Zeichenfläche betreten
    Entered,
    /// Zeiger hat die Zeichenfläche verlassen
    Exited,
}

/// Beteiligte Maustaste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Linke Taste
    Primary,
    /// Rechte Taste
    Secondary,
    /// Mittlere Taste
    Middle,
    /// Keine Taste (reine Bewegung)
    #[default]
    None,
}

/// Rohes Zeiger-Event der Shell in Pixel-Koordinaten der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: IVec2,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: IVec2, button: PointerButton) -> Self {
        Self {
            kind,
            position,
            button,
        }
    }

    pub fn pressed(position: IVec2, button: PointerButton) -> Self {
        Self::new(PointerEventKind::Pressed, position, button)
    }

    pub fn released(position: IVec2, button: PointerButton) -> Self {
        Self::new(PointerEventKind::Released, position, button)
    }

    pub fn clicked(position: IVec2, button: PointerButton) -> Self {
        Self::new(PointerEventKind::Clicked, position, button)
    }

    pub fn moved(position: IVec2) -> Self {
        Self::new(PointerEventKind::Moved, position, PointerButton::None)
    }

    pub fn dragged(position: IVec2, button: PointerButton) -> Self {
        Self::new(PointerEventKind::Dragged, position, button)
    }

    pub fn entered(position: IVec2) -> Self {
        Self::new(PointerEventKind::Entered, position, PointerButton::None)
    }

    pub fn exited(position: IVec2) -> Self {
        Self::new(PointerEventKind::Exited, position, PointerButton::None)
    }
}
