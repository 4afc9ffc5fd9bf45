use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Set(Theme),
    Toggle,
}

pub fn run(theme: &mut Theme, action: ThemeAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        ThemeAction::Show => {
            result.add_message(CmdMessage::info(theme.to_string()));
        }
        ThemeAction::Set(new) => {
            *theme = new;
            result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
        }
        ThemeAction::Toggle => {
            *theme = theme.toggled();
            result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
        }
    }
    Ok(result.with_theme(*theme))
}
