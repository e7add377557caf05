#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitState {
    Normal,
    InSingleQuote,
    InDoubleQuote,
    InBacktick,
}
