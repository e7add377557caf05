#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    /// Treat `\` inside quoted regions as an escape for the next character (MySQL).
    pub backslash_escapes: bool,
}
