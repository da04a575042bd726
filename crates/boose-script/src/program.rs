//! A parsed script and its runner.

use crate::command::Command;
use crate::error::ScriptError;
use crate::parser::parse_program;
use boose_canvas::DrawTarget;

/// A command with the script line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub line: usize,
    pub command: Command,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Parse script text. See [`parse_program`].
    pub fn parse(input: &str) -> Result<Self, ScriptError> {
        parse_program(input)
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Execute every statement in order against `target`.
    ///
    /// Stops at the first command the target rejects; whatever earlier
    /// commands drew stays drawn. Returns the number of commands executed.
    pub fn run<T: DrawTarget + ?Sized>(&self, target: &mut T) -> Result<usize, ScriptError> {
        for stmt in &self.statements {
            if let Err(source) = stmt.command.apply(target) {
                log::warn!("line {}: `{}` rejected: {source}", stmt.line, stmt.command);
                return Err(ScriptError::Canvas {
                    line: stmt.line,
                    source,
                });
            }
            log::trace!("line {}: {}", stmt.line, stmt.command);
        }
        log::debug!("ran {} commands", self.statements.len());
        Ok(self.statements.len())
    }
}

/// Parse and run a script in one step.
pub fn run_script<T: DrawTarget + ?Sized>(input: &str, target: &mut T) -> Result<usize, ScriptError> {
    Program::parse(input)?.run(target)
}
