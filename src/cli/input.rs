//! 输入源
//!
//! 会话从 `LineSource` 逐行读取输入：交互模式使用 rustyline，
//! 管道输入和测试使用任意 `BufRead`

use super::completer::MenuCompleter;
use crate::error::{Error, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// 行输入源
pub trait LineSource {
    /// 显示提示并读取一行（不含换行符）；输入结束时返回 `None`
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// 基于 `BufRead` 的输入源
pub struct ScriptedInput<R> {
    reader: R,
    echo_prompt: bool,
}

impl<R: BufRead> ScriptedInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            echo_prompt: false,
        }
    }

    /// 读取前把提示打印到标准输出
    pub fn with_prompt_echo(mut self) -> Self {
        self.echo_prompt = true;
        self
    }
}

impl<R: BufRead> LineSource for ScriptedInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.echo_prompt {
            print!("{}", prompt);
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// rustyline 交互输入源
pub struct ReadlineInput {
    editor: Editor<MenuCompleter, DefaultHistory>,
}

impl ReadlineInput {
    pub fn new() -> Result<Self> {
        let mut editor = Editor::new().map_err(|e| Error::Readline(e.to_string()))?;
        editor.set_helper(Some(MenuCompleter::new()));
        Ok(Self { editor })
    }
}

impl LineSource for ReadlineInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let result = self.editor.readline(prompt);
        if let Ok(line) = &result {
            if !line.trim().is_empty() {
                if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                    debug!(error = %e, "failed to record history entry");
                }
            }
        }
        readline_outcome(result)
    }
}

/// 把 rustyline 的读取结果转换为会话输入
///
/// Ctrl-D 结束输入；Ctrl-C 只放弃当前这一行，按空行交给会话处理。
fn readline_outcome(result: rustyline::Result<String>) -> Result<Option<String>> {
    match result {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
        Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(Error::Readline(e.to_string())),
    }
}
