//! Handler für Graph-Mutationen: Verschieben, Verbinden, Trennen, Löschen.

use crate::app::{DesignerState, InteractionState};
use crate::core::BrickId;
use anyhow::Context;
use glam::IVec2;

/// Verschiebt einen Brick an eine neue linke obere Ecke.
pub fn move_brick<T>(
    state: &mut DesignerState<T>,
    brick: BrickId,
    position: IVec2,
) -> anyhow::Result<()> {
    state
        .graph
        .move_brick(brick, position)
        .with_context(|| format!("Brick {} kann nicht verschoben werden", brick))?;
    Ok(())
}

/// Verbindet zwei Bricks. Eine Ablehnung meldet der Graph als `LinkRefused`.
pub fn connect<T>(state: &mut DesignerState<T>, a: BrickId, b: BrickId) -> anyhow::Result<()> {
    state
        .graph
        .connect(a, b)
        .with_context(|| format!("Verbindung {}↔{} nicht möglich", a, b))?;
    Ok(())
}

/// Trennt zwei Bricks; fehlende Verbindung ist ein No-op.
pub fn disconnect<T>(state: &mut DesignerState<T>, a: BrickId, b: BrickId) -> anyhow::Result<()> {
    state
        .graph
        .disconnect(a, b)
        .with_context(|| format!("Verbindung {}↔{} kann nicht getrennt werden", a, b))?;
    Ok(())
}

/// Löscht den selektierten Brick samt aller Verbindungen.
pub fn remove_selected<T>(state: &mut DesignerState<T>) -> anyhow::Result<()> {
    let Some(brick) = state.graph.selected() else {
        return Ok(());
    };
    state
        .graph
        .remove_brick(brick)
        .with_context(|| format!("Brick {} kann nicht gelöscht werden", brick))?;

    // Eine laufende Geste verliert mit dem Brick ihren Bezug
    if state.interaction.is_gesture() {
        state.interaction = InteractionState::Default;
    }
    Ok(())
}
