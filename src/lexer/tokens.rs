//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading each token shape from the
//! input: identifiers and keywords, integer literals, and punctuation.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Reads and returns the next token from the input.
    ///
    /// This method is called repeatedly by
    /// [`tokenize`](super::Lexer::tokenize) to produce the token stream.
    /// It assumes that whitespace and comments have already been skipped
    /// and that the end of input has not been reached.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if an integer literal overflows `i64`.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let Some(c) = self.current_char() else {
            // tokenize() handles end of input before calling here, but
            // returning Eof keeps this total.
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Ok(Token::new(TokenKind::Eof, span));
        };

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        if c.is_ascii_alphabetic() {
            return Ok(self.read_word(start_pos, start_line, start_column));
        }

        if c.is_ascii_digit() {
            return self.read_number(start_pos, start_line, start_column);
        }

        // `<` and `>` are the only characters that can start a
        // two-character lexeme (`<=`, `>=`).
        if c == '<' || c == '>' {
            self.advance();
            let has_equals = self.current_char() == Some('=');
            if has_equals {
                self.advance();
            }
            let kind = match (c, has_equals) {
                ('<', true) => TokenKind::LessEqual,
                ('<', false) => TokenKind::LessThan,
                ('>', true) => TokenKind::GreaterEqual,
                _ => TokenKind::GreaterThan,
            };
            let span = Span::new(start_pos, self.pos, start_line, start_column);
            return Ok(Token::new(kind, span));
        }

        // Everything else is a single-character symbol. Characters with
        // no assigned meaning are passed through as Unknown; the parser
        // rejects them when nothing matches.
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,
            '^' => TokenKind::Caret,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '=' => TokenKind::Equals,
            '#' => TokenKind::Hash,
            '&' => TokenKind::Ampersand,
            '|' => TokenKind::Pipe,
            other => TokenKind::Unknown(other),
        };
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Ok(Token::new(kind, span))
    }

    /// Reads an identifier, keyword, or keyword literal from the input.
    ///
    /// The first character is an ASCII letter; the rest are ASCII
    /// letters, digits, or underscores. Keywords and the literals
    /// `true`/`false`/`null` map to their dedicated token kinds.
    fn read_word(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let word = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let kind = match word {
            "true" => TokenKind::BoolLiteral(true),
            "false" => TokenKind::BoolLiteral(false),
            "null" => TokenKind::Null,
            "var" => TokenKind::Var,
            "set" => TokenKind::Set,
            "if" => TokenKind::If,
            "elif" => TokenKind::Elif,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "then" => TokenKind::Then,
            "for" => TokenKind::For,
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,
            "def" => TokenKind::Def,
            "return" => TokenKind::Return,
            "print" => TokenKind::Print,
            "func" => TokenKind::Func,
            _ => TokenKind::Identifier(word.to_string()),
        };

        Token::new(kind, span)
    }

    /// Reads an integer literal from the input.
    ///
    /// Integer literals are one or more ASCII digits, decoded as `i64`.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the value does not fit in `i64`.
    fn read_number(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let literal = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let value: i64 = literal
            .parse()
            .map_err(|_: std::num::ParseIntError| LexError::integer_overflow(literal, span))?;

        Ok(Token::new(TokenKind::IntLiteral(value), span))
    }
}
