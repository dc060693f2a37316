mod error;
mod lexer;
mod spanned;

#[cfg(test)]
mod tests;

use crate::memory::ScopedMemory;

pub use error::{ScriptError, ScriptErrorKind};
pub use lexer::{parse_integer, Ctrl, KeyWord, Lexer, Token};
pub use spanned::{span_snippet, Span, SpanSnippet, Spanned};

/// Executes a script one statement at a time, straight off the token stream.
pub struct Interpreter<'a> {
    lexer: Lexer<'a>,
    memory: ScopedMemory,
    saved_output: Option<String>,
}

impl<'a> Interpreter<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            memory: ScopedMemory::new(),
            saved_output: None,
        }
    }

    /// Collect printed lines instead of writing them to stdout.
    pub fn save_output(&mut self) {
        if self.saved_output.is_none() {
            self.saved_output = Some(String::new());
        }
    }

    pub fn take_saved_output(&mut self) -> Option<String> {
        self.saved_output.take()
    }

    pub fn run(&mut self) -> Result<(), ScriptError> {
        self.memory.open_scope();

        while let Some(token) = self.lexer.get_token() {
            log::trace!("statement `{}` at byte {}", token.item.text(), token.span.start);

            self.exec_stmt(token)?;
        }

        self.memory.close_scope();

        if self.memory.has_open_scope() {
            return Err(ScriptError::new(ScriptErrorKind::UnterminatedScope, None));
        }

        Ok(())
    }

    fn exec_stmt(&mut self, token: Spanned<Token<'a>>) -> Result<(), ScriptError> {
        match token.item {
            Token::KeyWord(KeyWord::Print) => self.print_stmt(),
            Token::KeyWord(KeyWord::Scope) => self.scope_stmt(),
            Token::Ctrl(Ctrl::RightCurly) => self.close_stmt(token.span),
            // anything else names the variable being assigned
            target => self.assign_stmt(target.text()),
        }
    }

    fn print_stmt(&mut self) -> Result<(), ScriptError> {
        let name = self.expect_token()?.item.text();

        let line = match self.memory.read(name) {
            Some(value) => value.to_string(),
            None => String::from("null"),
        };

        self.emit(line);

        Ok(())
    }

    fn scope_stmt(&mut self) -> Result<(), ScriptError> {
        let token = self.expect_token()?;

        if token.item != Token::Ctrl(Ctrl::LeftCurly) {
            return Err(ScriptError::at(
                ScriptErrorKind::ExpectedOpeningBrace,
                token.span,
            ));
        }

        self.memory.open_scope();
        log::debug!("opened scope, depth {}", self.memory.depth());

        Ok(())
    }

    fn close_stmt(&mut self, span: Span) -> Result<(), ScriptError> {
        // the global frame is only closed once the stream is exhausted
        if self.memory.depth() <= 1 {
            return Err(ScriptError::at(ScriptErrorKind::UnmatchedClosingBrace, span));
        }

        self.memory.close_scope();
        log::debug!("closed scope, depth {}", self.memory.depth());

        Ok(())
    }

    fn assign_stmt(&mut self, target: &'a str) -> Result<(), ScriptError> {
        let operator = self.expect_token()?;

        if operator.item != Token::Ctrl(Ctrl::Equal) {
            return Err(ScriptError::at(
                ScriptErrorKind::UnrecognizedOperand,
                operator.span,
            ));
        }

        let operand = self.expect_token()?.item.text();

        if let Some(value) = parse_integer(operand) {
            self.memory.write(target, value);
            return Ok(());
        }

        match self.memory.read(operand) {
            Some(value) => self.memory.write(target, value),
            None => log::debug!("`{}` is unset, assignment to `{}` skipped", operand, target),
        }

        Ok(())
    }

    fn expect_token(&mut self) -> Result<Spanned<Token<'a>>, ScriptError> {
        self.lexer.get_token().ok_or_else(ScriptError::end_of_input)
    }

    fn emit(&mut self, line: String) {
        if let Some(output) = &mut self.saved_output {
            output.push_str(&line);
            output.push('\n');
        } else {
            println!("{line}");
        }
    }
}

/// Runs `source` to completion and returns the printed lines.
pub fn run_source(source: &str) -> Result<Vec<String>, ScriptError> {
    let mut interpreter = Interpreter::new(source);
    interpreter.save_output();
    interpreter.run()?;

    let output = interpreter.take_saved_output().unwrap_or_default();

    Ok(output.lines().map(String::from).collect())
}
