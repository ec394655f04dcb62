//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und die Shell gemeinsam nutzen.

pub mod options;

pub use options::DesignerOptions;
pub use options::{GRID_SPACING_PX, LINK_TAG_MARGIN_PX, LINK_TAG_SIZE_PX};
