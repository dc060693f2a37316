use super::spanned::{Span, Spanned};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KeyWord {
    Print,
    Scope,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Ctrl {
    LeftCurly,
    RightCurly,
    Equal,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token<'a> {
    KeyWord(KeyWord),
    Ctrl(Ctrl),
    Word(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(word: &'a str) -> Self {
        match word {
            "print" => Token::KeyWord(KeyWord::Print),
            "scope" => Token::KeyWord(KeyWord::Scope),
            "{" => Token::Ctrl(Ctrl::LeftCurly),
            "}" => Token::Ctrl(Ctrl::RightCurly),
            "=" => Token::Ctrl(Ctrl::Equal),
            _ => Token::Word(word),
        }
    }

    /// The literal text of the token as it appeared in the source.
    pub fn text(self) -> &'a str {
        match self {
            Token::KeyWord(KeyWord::Print) => "print",
            Token::KeyWord(KeyWord::Scope) => "scope",
            Token::Ctrl(Ctrl::LeftCurly) => "{",
            Token::Ctrl(Ctrl::RightCurly) => "}",
            Token::Ctrl(Ctrl::Equal) => "=",
            Token::Word(word) => word,
        }
    }
}

/// Parses `-?[0-9]+` into an `i64`. Anything else, including a leading `+`
/// or a literal that overflows, is not an integer.
pub fn parse_integer(word: &str) -> Option<i64> {
    let digits = word.strip_prefix('-').unwrap_or(word);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    word.parse().ok()
}

/// Splits a script into whitespace separated tokens.
///
/// The lexer is a cursor over the source: `pos` is the byte offset of the
/// next unread character and tokens are produced lazily, one per call.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn get_token(&mut self) -> Option<Spanned<Token<'a>>> {
        self.skip_whitespace();

        let start = self.pos;
        let rest = &self.input[start..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());

        if len == 0 {
            return None;
        }

        self.pos += len;

        let word = &self.input[start..self.pos];

        Some(Spanned::new(Token::classify(word), Span::new(start, self.pos)))
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        let trimmed = rest.trim_start();

        self.pos += rest.len() - trimmed.len();
    }
}
