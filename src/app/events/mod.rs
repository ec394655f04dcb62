//! Eingehende Intents, mutierende Commands und Anfragen an die Shell.

mod command;
mod intent;
mod pointer;
mod shell;

pub use command::DesignerCommand;
pub use intent::DesignerIntent;
pub use pointer::{PointerButton, PointerEvent, PointerEventKind};
pub use shell::{ContextMenuRequest, ShellRequest};
