//! Feature-Handler für DesignerCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod editing;
pub mod interaction;
pub mod selection;
pub mod view;
