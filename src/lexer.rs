//! Lexer for the Choreo language.
//!
//! Converts UTF-8 source text into positioned [`Token`]s, one call to
//! [`Lexer::next_token`] at a time. The lexer is permissive: unknown
//! runes become `Illegal` tokens and an unterminated string yields
//! whatever text is present up to EOF. It raises no diagnostics of
//! its own; malformed input fails downstream in the parser.

use crate::token::{lookup_ident, Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Scan and return the next token. Returns `Eof` forever once the
    /// input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        // Line comments run to end of line and leave no token behind.
        while self.peek() == Some('/') && self.peek_next() == Some('/') {
            self.skip_comment();
            self.skip_whitespace();
        }

        let line = self.line;
        let col = self.col;

        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Token::new(TokenKind::Eof, "", line, col),
        };

        match ch {
            '=' => match self.peek_next() {
                Some('=') => self.two_char(TokenKind::Eq),
                Some('~') => self.two_char(TokenKind::MatchOp),
                _ => self.single_char(TokenKind::Assign),
            },
            '+' => self.single_char(TokenKind::Plus),
            '-' => match self.peek_next() {
                Some('>') => self.two_char(TokenKind::Arrow),
                _ => self.single_char(TokenKind::Minus),
            },
            '!' => match self.peek_next() {
                Some('=') => self.two_char(TokenKind::NotEq),
                _ => self.single_char(TokenKind::Bang),
            },
            '*' => self.single_char(TokenKind::Asterisk),
            '/' => self.single_char(TokenKind::Slash),
            '<' => match self.peek_next() {
                Some('-') => self.two_char(TokenKind::Send),
                Some('=') => self.two_char(TokenKind::Lte),
                _ => self.single_char(TokenKind::Lt),
            },
            '>' => match self.peek_next() {
                Some('=') => self.two_char(TokenKind::Gte),
                _ => self.single_char(TokenKind::Gt),
            },
            ',' => self.single_char(TokenKind::Comma),
            ';' => self.single_char(TokenKind::Semicolon),
            ':' => self.single_char(TokenKind::Colon),
            '(' => self.single_char(TokenKind::LParen),
            ')' => self.single_char(TokenKind::RParen),
            '{' => self.single_char(TokenKind::LBrace),
            '}' => self.single_char(TokenKind::RBrace),
            '[' => self.single_char(TokenKind::LBracket),
            ']' => self.single_char(TokenKind::RBracket),
            '"' => self.lex_string(line, col),
            c if is_letter(c) => self.lex_ident_or_keyword(line, col),
            c if c.is_ascii_digit() => self.lex_number(line, col),
            c => {
                self.advance();
                Token::new(TokenKind::Illegal, c.to_string(), line, col)
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == ' ' || ch == '\t' || ch == '\n' || ch == '\r' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn skip_comment(&mut self) {
        while !self.is_at_end() && self.peek() != Some('\n') {
            self.advance();
        }
    }

    fn single_char(&mut self, kind: TokenKind) -> Token {
        let line = self.line;
        let col = self.col;
        let ch = self.advance();
        Token::new(kind, ch.to_string(), line, col)
    }

    fn two_char(&mut self, kind: TokenKind) -> Token {
        let line = self.line;
        let col = self.col;
        let mut literal = String::new();
        literal.push(self.advance());
        literal.push(self.advance());
        Token::new(kind, literal, line, col)
    }

    /// Read a string literal. The lexeme is the raw inner text: a
    /// backslash consumes the following rune verbatim, with no escape
    /// expansion. EOF inside the string terminates the lexeme without
    /// error.
    fn lex_string(&mut self, line: usize, col: usize) -> Token {
        self.advance(); // opening quote
        let mut s = String::new();
        while let Some(ch) = self.peek() {
            if ch == '"' {
                break;
            }
            s.push(self.advance());
            if ch == '\\' && !self.is_at_end() {
                s.push(self.advance());
            }
        }
        if self.peek() == Some('"') {
            self.advance();
        }
        Token::new(TokenKind::Str, s, line, col)
    }

    fn lex_ident_or_keyword(&mut self, line: usize, col: usize) -> Token {
        let mut s = String::new();
        while let Some(ch) = self.peek() {
            if is_letter(ch) || ch.is_ascii_digit() {
                s.push(self.advance());
            } else {
                break;
            }
        }
        let kind = lookup_ident(&s);
        Token::new(kind, s, line, col)
    }

    fn lex_number(&mut self, line: usize, col: usize) -> Token {
        let mut s = String::new();
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            s.push(self.advance());
        }

        // A '.' followed by another digit extends the lexeme into a
        // float; anything else (including "1.") stays an integer.
        let mut kind = TokenKind::Int;
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            kind = TokenKind::Float;
            s.push(self.advance());
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                s.push(self.advance());
            }
        }

        Token::new(kind, s, line, col)
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}
