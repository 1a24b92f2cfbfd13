//! 交互会话
//!
//! 把菜单选择翻译成图操作。会话拥有图，提示与回显都在这里完成，
//! 图本身只提供纯数据操作。

use super::input::LineSource;
use super::printer::{menu_text, print_degrees, print_stats};
use crate::error::Result;
use crate::graph::Graph;
use crate::types::parse_label;
use std::io::Write;
use tracing::{debug, info};

/// 命令执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出会话
    Exit,
}

/// 菜单命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddVertex,
    DeleteVertex,
    FindEdge,
    Show,
    Details,
    Exit,
    Stats,
    AddEdge,
    Help,
}

impl MenuCommand {
    /// 解析菜单选择（编号或别名）
    pub fn parse(choice: &str) -> Option<Self> {
        let cmd = match choice.trim().to_lowercase().as_str() {
            "1" | "add" => Self::AddVertex,
            "2" | "delete" | "del" => Self::DeleteVertex,
            "3" | "find" => Self::FindEdge,
            "4" | "show" => Self::Show,
            "5" | "details" => Self::Details,
            "6" | "exit" | "quit" | "q" => Self::Exit,
            "7" | "stats" => Self::Stats,
            "8" | "edge" => Self::AddEdge,
            "help" | "h" | "?" => Self::Help,
            _ => return None,
        };
        Some(cmd)
    }
}

/// 交互会话
pub struct Session {
    graph: Graph,
}

impl Session {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// 获取图
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// 取回图
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// 运行菜单循环，直到选择退出或输入结束
    pub fn run<S: LineSource, W: Write>(&mut self, input: &mut S, out: &mut W) -> Result<()> {
        info!(vertices = self.graph.vertex_count(), "session started");
        loop {
            write!(out, "{}", menu_text())?;
            out.flush()?;
            let Some(choice) = input.read_line("Choice: ")? else {
                break;
            };
            if self.handle_choice(&choice, input, out)? == CommandResult::Exit {
                break;
            }
        }
        info!(vertices = self.graph.vertex_count(), "session finished");
        Ok(())
    }

    /// 处理一次菜单选择
    pub fn handle_choice<S: LineSource, W: Write>(
        &mut self,
        choice: &str,
        input: &mut S,
        out: &mut W,
    ) -> Result<CommandResult> {
        let Some(cmd) = MenuCommand::parse(choice) else {
            writeln!(out, "Invalid choice\n")?;
            return Ok(CommandResult::Continue);
        };
        debug!(?cmd, "menu command");

        match cmd {
            MenuCommand::AddVertex => self.add_vertex(input, out),
            MenuCommand::DeleteVertex => self.delete_vertex(input, out),
            MenuCommand::FindEdge => self.find_edge(input, out),
            MenuCommand::AddEdge => self.add_edge(input, out),
            MenuCommand::Show => {
                writeln!(out, "{}", self.graph.render())?;
                Ok(CommandResult::Continue)
            }
            MenuCommand::Details => {
                writeln!(out, "{}", self.graph.render_detailed())?;
                Ok(CommandResult::Continue)
            }
            MenuCommand::Stats => {
                write!(out, "{}", print_stats(&self.graph))?;
                write!(out, "{}", print_degrees(&self.graph))?;
                Ok(CommandResult::Continue)
            }
            MenuCommand::Help => {
                write!(out, "{}", menu_text())?;
                Ok(CommandResult::Continue)
            }
            MenuCommand::Exit => Ok(CommandResult::Exit),
        }
    }

    fn add_vertex<S: LineSource, W: Write>(
        &mut self,
        input: &mut S,
        out: &mut W,
    ) -> Result<CommandResult> {
        let Some(raw) = input.read_line("Vertex label: ")? else {
            return Ok(CommandResult::Exit);
        };
        let Some(label) = parse_label(&raw) else {
            writeln!(out, "Invalid label\n")?;
            return Ok(CommandResult::Continue);
        };

        writeln!(out, "Enter connections (empty line to finish):")?;
        let mut connected = Vec::new();
        while let Some(line) = input.read_line("> ")? {
            if line.trim().is_empty() {
                break;
            }
            // 非法输入忽略，继续读取
            if let Some(target) = parse_label(&line) {
                connected.push(target);
            }
        }

        match self.graph.add_vertex(label, &connected) {
            Ok(_) => {
                writeln!(out, "Vertex added\n")?;
                writeln!(out, "{}", self.graph.render())?;
            }
            Err(e) => writeln!(out, "Error: {}\n", e)?,
        }
        Ok(CommandResult::Continue)
    }

    fn delete_vertex<S: LineSource, W: Write>(
        &mut self,
        input: &mut S,
        out: &mut W,
    ) -> Result<CommandResult> {
        let Some(raw) = input.read_line("Vertex label: ")? else {
            return Ok(CommandResult::Exit);
        };
        let Some(label) = parse_label(&raw) else {
            writeln!(out, "Invalid label\n")?;
            return Ok(CommandResult::Continue);
        };

        let Some(confirm) = input.read_line("Delete? (yes/no): ")? else {
            return Ok(CommandResult::Exit);
        };
        if !matches!(confirm.trim().to_lowercase().as_str(), "yes" | "y") {
            writeln!(out, "Cancelled\n")?;
            return Ok(CommandResult::Continue);
        }

        match self.graph.delete_vertex(label) {
            Ok(()) => {
                writeln!(out, "Vertex deleted\n")?;
                writeln!(out, "{}", self.graph.render())?;
            }
            Err(e) => writeln!(out, "Error: {}\n", e)?,
        }
        Ok(CommandResult::Continue)
    }

    /// 读取源、目标两行；输入结束时返回 `None`
    fn read_pair<S: LineSource>(input: &mut S) -> Result<Option<(String, String)>> {
        let Some(source) = input.read_line("Source vertex: ")? else {
            return Ok(None);
        };
        let Some(target) = input.read_line("Target vertex: ")? else {
            return Ok(None);
        };
        Ok(Some((source, target)))
    }

    fn find_edge<S: LineSource, W: Write>(
        &mut self,
        input: &mut S,
        out: &mut W,
    ) -> Result<CommandResult> {
        let Some((source, target)) = Self::read_pair(input)? else {
            return Ok(CommandResult::Exit);
        };
        let (Some(source), Some(target)) = (parse_label(&source), parse_label(&target)) else {
            writeln!(out, "Invalid label\n")?;
            return Ok(CommandResult::Continue);
        };

        if self.graph.find_edge(source, target) {
            writeln!(out, "Edge found\n")?;
        } else {
            writeln!(out, "Edge not found\n")?;
        }
        Ok(CommandResult::Continue)
    }

    fn add_edge<S: LineSource, W: Write>(
        &mut self,
        input: &mut S,
        out: &mut W,
    ) -> Result<CommandResult> {
        let Some((source, target)) = Self::read_pair(input)? else {
            return Ok(CommandResult::Exit);
        };
        let (Some(source), Some(target)) = (parse_label(&source), parse_label(&target)) else {
            writeln!(out, "Invalid label\n")?;
            return Ok(CommandResult::Continue);
        };

        match self.graph.add_edge(source, target) {
            Ok(()) => {
                writeln!(out, "Edge added\n")?;
                writeln!(out, "{}", self.graph.render())?;
            }
            Err(e) => writeln!(out, "Error: {}\n", e)?,
        }
        Ok(CommandResult::Continue)
    }
}
