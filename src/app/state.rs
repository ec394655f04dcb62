//! Designer State: zentrale Datenhaltung.

use super::events::{ContextMenuRequest, ShellRequest};
use super::interaction::{InteractionKind, InteractionState};
use crate::core::{link_tag_rect, BrickId, ConnectionGraph, Rect};
use crate::shared::DesignerOptions;
use glam::IVec2;

/// Eine Verbindung, aufbereitet zum Zeichnen (Mittelpunkt zu Mittelpunkt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSegment {
    pub a: BrickId,
    pub b: BrickId,
    pub from: IVec2,
    pub to: IVec2,
}

/// Hauptzustand eines Designers.
pub struct DesignerState<T> {
    /// Bricks, Verbindungen und Selektion
    pub graph: ConnectionGraph<T>,
    /// Aktueller Zustand der Interaktions-State-Machine
    pub interaction: InteractionState,
    /// Laufzeit-Optionen (Grid, Link-Tag)
    pub options: DesignerOptions,
    /// Letzte bekannte Zeigerposition (`None` = Zeiger außerhalb)
    pub pointer: Option<IVec2>,
    /// Position der letzten Kontextmenü-Anforderung
    pub last_menu_position: Option<IVec2>,
    shell_requests: Vec<ShellRequest>,
}

impl<T> Default for DesignerState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DesignerState<T> {
    /// Erstellt einen leeren Designer mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(DesignerOptions::default())
    }

    /// Erstellt einen leeren Designer mit den angegebenen Optionen.
    pub fn with_options(options: DesignerOptions) -> Self {
        Self {
            graph: ConnectionGraph::new(),
            interaction: InteractionState::Default,
            options,
            pointer: None,
            last_menu_position: None,
            shell_requests: Vec::new(),
        }
    }

    /// Art des aktuellen Interaktionszustands.
    pub fn interaction_kind(&self) -> InteractionKind {
        self.interaction.kind()
    }

    /// Ob die Bearbeitung gesperrt ist.
    pub fn is_locked(&self) -> bool {
        self.interaction.is_locked()
    }

    // ── Link-Tag ────────────────────────────────────────────────

    /// Bounds des Link-Tags am selektierten Brick, frisch aus dessen Position berechnet.
    pub fn link_tag_bounds(&self) -> Option<Rect> {
        self.graph.selected_brick().map(|brick| {
            link_tag_rect(
                brick.bounds(),
                self.options.link_tag_size,
                self.options.link_tag_margin,
            )
        })
    }

    /// Ob `point` im Link-Tag des selektierten Bricks liegt.
    pub fn is_in_link_tag(&self, point: IVec2) -> bool {
        self.link_tag_bounds()
            .is_some_and(|bounds| bounds.contains(point))
    }

    // ── Zeichen-Abfragen ────────────────────────────────────────

    /// Gummiband-Linie (Mitte des selektierten Bricks → Zeiger) während Linking/Unlinking.
    pub fn pending_link_line(&self) -> Option<(IVec2, IVec2)> {
        if !self.interaction.is_pending_link() {
            return None;
        }
        let from = self.graph.selected_brick()?.bounds().center();
        Some((from, self.pointer?))
    }

    /// Alle Verbindungen genau einmal, mit den Mittelpunkten beider Bricks.
    pub fn link_segments(&self) -> impl Iterator<Item = LinkSegment> + '_ {
        self.graph.links().filter_map(move |(a, b)| {
            let from = self.graph.brick(a)?.bounds().center();
            let to = self.graph.brick(b)?.bounds().center();
            Some(LinkSegment { a, b, from, to })
        })
    }

    // ── Shell-Anfragen ──────────────────────────────────────────

    /// Fordert ein Neuzeichnen an; direkt aufeinanderfolgende Anfragen werden zusammengefasst.
    pub fn request_redraw(&mut self) {
        if self.shell_requests.last() != Some(&ShellRequest::Redraw) {
            self.shell_requests.push(ShellRequest::Redraw);
        }
    }

    /// Fordert ein Kontextmenü an und merkt sich dessen Position.
    pub fn request_context_menu(&mut self, request: ContextMenuRequest) {
        self.last_menu_position = Some(request.position());
        self.shell_requests.push(ShellRequest::ContextMenu(request));
    }

    /// Ausstehende Anfragen ohne sie zu entnehmen.
    pub fn pending_shell_requests(&self) -> &[ShellRequest] {
        &self.shell_requests
    }

    /// Entnimmt alle ausstehenden Anfragen in Reihenfolge.
    pub fn drain_shell_requests(&mut self) -> Vec<ShellRequest> {
        std::mem::take(&mut self.shell_requests)
    }
}
