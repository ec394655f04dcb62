//! Handler für Selektions-Operationen.

use crate::app::DesignerState;
use crate::core::BrickId;
use anyhow::Context;

/// Selektiert einen Brick.
pub fn select<T>(state: &mut DesignerState<T>, brick: BrickId) -> anyhow::Result<()> {
    state
        .graph
        .select(brick)
        .with_context(|| format!("Brick {} kann nicht selektiert werden", brick))
}

/// Hebt die aktuelle Selektion auf.
pub fn clear<T>(state: &mut DesignerState<T>) {
    state.graph.clear_selection();
}
