//! Handler für Interaktionszustand, Zeiger und Shell-Anfragen.

use crate::app::{ContextMenuRequest, DesignerState, InteractionState};
use glam::IVec2;

/// Wechselt den Zustand der Interaktions-State-Machine.
pub fn set_state<T>(state: &mut DesignerState<T>, next: InteractionState) {
    if state.interaction != next {
        log::debug!(
            "Interaktion: {} → {}",
            state.interaction.kind(),
            next.kind()
        );
    }
    state.interaction = next;
}

/// Merkt sich die aktuelle Zeigerposition.
pub fn update_pointer<T>(state: &mut DesignerState<T>, position: Option<IVec2>) {
    state.pointer = position;
}

/// Fordert ein Kontextmenü bei der Shell an.
pub fn show_context_menu<T>(state: &mut DesignerState<T>, request: ContextMenuRequest) {
    state.request_context_menu(request);
}

/// Fordert ein Neuzeichnen an.
pub fn request_redraw<T>(state: &mut DesignerState<T>) {
    state.request_redraw();
}
