use std::iter::Peekable;
use std::str::Chars;
use crate::import::enums::split_state::SplitState;
use crate::import::structs::split_options::SplitOptions;
use crate::import::structs::statement_batch::StatementBatch;

/// Splits `sql` into statements using standard SQL quoting.
pub fn split(sql: &str) -> StatementBatch
{
    split_with(sql, SplitOptions::default())
}

/// Splits `sql` on `;` outside quoted regions, dropping `--` and `#` line
/// comments and empty fragments.
///
/// Unbalanced quotes never fail: the unterminated literal runs to the end of
/// the input and becomes part of the last statement.
pub fn split_with(sql: &str, options: SplitOptions) -> StatementBatch
{
    let mut batch = StatementBatch::default();
    let mut current = String::with_capacity(256);
    let mut state = SplitState::Normal;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            SplitState::Normal => match c {
                '\'' => {
                    state = SplitState::InSingleQuote;
                    current.push(c);
                }
                '"' => {
                    state = SplitState::InDoubleQuote;
                    current.push(c);
                }
                '`' => {
                    state = SplitState::InBacktick;
                    current.push(c);
                }
                ';' => {
                    batch.push(&current);
                    current.clear();
                }
                '#' => skip_line(&mut chars),
                '-' if chars.peek() == Some(&'-') => skip_line(&mut chars),
                _ => current.push(c),
            },
            SplitState::InSingleQuote | SplitState::InDoubleQuote | SplitState::InBacktick => {
                current.push(c);
                if c == '\\' && options.backslash_escapes && state != SplitState::InBacktick {
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                } else if Some(c) == state.closing_quote() {
                    state = SplitState::Normal;
                }
            }
        }
    }
    batch.push(&current);
    batch
}

// Consumes up to, but not including, the next newline.
fn skip_line(chars: &mut Peekable<Chars>)
{
    while let Some(&next) = chars.peek() {
        if next == '\n' {
            break;
        }
        chars.next();
    }
}
