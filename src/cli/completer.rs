//! 菜单命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 菜单命令别名
pub const MENU_COMMANDS: &[&str] = &[
    "add", "delete", "find", "show", "details", "exit", "quit", "stats", "edge", "help",
];

/// 确认提示的回答
const CONFIRM_WORDS: &[&str] = &["yes", "no"];

/// LetterGraph CLI 补全器
#[derive(Default)]
pub struct MenuCompleter;

impl MenuCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 给定前缀的候选项
    pub fn candidates(prefix: &str) -> Vec<&'static str> {
        let lower = prefix.to_lowercase();
        MENU_COMMANDS
            .iter()
            .chain(CONFIRM_WORDS.iter())
            .filter(|cmd| cmd.starts_with(&lower))
            .copied()
            .collect()
    }
}

impl Completer for MenuCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];

        // 只补全单个单词
        if line_to_cursor.is_empty() || line_to_cursor.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }

        let completions: Vec<Pair> = Self::candidates(line_to_cursor)
            .into_iter()
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        Ok((0, completions))
    }
}

impl Hinter for MenuCompleter {
    type Hint = String;
}

impl Highlighter for MenuCompleter {}

impl Validator for MenuCompleter {}

impl Helper for MenuCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates() {
        assert_eq!(MenuCompleter::candidates("d"), vec!["delete", "details"]);
        assert_eq!(MenuCompleter::candidates("E"), vec!["exit", "edge"]);
        assert_eq!(MenuCompleter::candidates("y"), vec!["yes"]);
        assert!(MenuCompleter::candidates("z").is_empty());
    }
}
