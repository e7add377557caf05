use crate::import::enums::split_state::SplitState;

impl SplitState {
    pub fn closing_quote(&self) -> Option<char> {
        match self {
            SplitState::Normal => None,
            SplitState::InSingleQuote => Some('\''),
            SplitState::InDoubleQuote => Some('"'),
            SplitState::InBacktick => Some('`'),
        }
    }
}
