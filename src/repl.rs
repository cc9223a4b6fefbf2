//! Line-oriented REPL: one expression per line.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::bytecode::{disassemble, Vm};
use crate::error::CalcError;

/// Output produced for one line of input.
#[derive(Debug, PartialEq)]
pub enum Reply {
    /// Nothing to print.
    Empty,
    /// Text to print as-is.
    Text(String),
    /// Evaluation failed.
    Error(CalcError),
    /// Leave the REPL.
    Exit,
}

pub struct Repl {
    vm: Vm,
    show_bytecode: bool,
    show_disassembly: bool,
}

impl Repl {
    pub fn new(show_bytecode: bool, show_disassembly: bool) -> Self {
        Self {
            vm: Vm::new(),
            show_bytecode,
            show_disassembly,
        }
    }

    /// Read lines from `input` until EOF or an exit command.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "calcvm {} - expression REPL", env!("CARGO_PKG_VERSION"))?;
        writeln!(output, "Type .help for available commands.\n")?;

        let mut lines = input.lines();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };

            match self.eval_line(&line?) {
                Reply::Empty => {}
                Reply::Text(text) => writeln!(output, "{}", text)?,
                Reply::Error(err) => writeln!(output, "{} {}", "error:".red().bold(), err)?,
                Reply::Exit => break,
            }
        }

        Ok(())
    }

    /// Evaluate one line of input.
    pub fn eval_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        match line {
            "" => Reply::Empty,
            "exit" | ".exit" | "quit" | ".quit" => Reply::Exit,
            ".help" => Reply::Text(
                [
                    ".bytecode     toggle printing of bytecode cells",
                    ".disassemble  toggle printing of the disassembly",
                    ".exit         leave the REPL",
                ]
                .join("\n"),
            ),
            ".bytecode" => {
                self.show_bytecode = !self.show_bytecode;
                Reply::Text(format!("bytecode: {}", on_off(self.show_bytecode)))
            }
            ".disassemble" => {
                self.show_disassembly = !self.show_disassembly;
                Reply::Text(format!("disassemble: {}", on_off(self.show_disassembly)))
            }
            source => match self.evaluate(source) {
                Ok(text) => Reply::Text(text),
                Err(err) => Reply::Error(err),
            },
        }
    }

    fn evaluate(&mut self, source: &str) -> Result<String, CalcError> {
        let chunk = crate::compile_chunk(source)?;

        let mut out = String::new();
        if self.show_bytecode {
            out.push_str(&format!("{:?}\n", chunk.code));
        }
        if self.show_disassembly {
            out.push_str(&disassemble(&chunk));
        }

        let result = self.vm.execute(&chunk.code)?;
        out.push_str(&result.to_string());
        Ok(out)
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
