//! Lexer implementation.
//!
//! Scans PHP source into tokens. Text outside `<?php ... ?>` becomes `InlineHtml`; inside, the
//! lexer classifies names, keywords, literals, trivia and punctuation closely enough that the
//! use-statement scanner sees the same token boundaries PHP's own tokenizer produces.
//!
//! Design: single linear pass, two modes (inline HTML / PHP code), never fails. Malformed input
//! yields an `Unknown` token or a token running to end of input, plus a diagnostic.
//!
//! Related: `LexResult`, `phpuse_syntax` (tokens/diagnostics).
use crate::keywords;
use phpuse_syntax::{
    Diagnostic, DiagnosticKind, Span, Token, TokenKind, codes, is_ident_continue, is_ident_start,
};

/// Lexer configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Treat a bare `<?` as an open tag (PHP's `short_open_tag` ini setting).
    pub short_open_tag: bool,
}

/// Lexing result.
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

/// PHP lexer.
pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    i: usize,
    options: LexOptions,
    in_code: bool,
    diagnostics: Vec<Diagnostic>,
    tokens: Vec<Token>,
    last_sig_kind: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer with default options.
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, LexOptions::default())
    }

    pub fn with_options(input: &'a str, options: LexOptions) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            i: 0,
            options,
            in_code: false,
            diagnostics: Vec::new(),
            tokens: Vec::new(),
            last_sig_kind: None,
        }
    }

    /// Run the lexer and return tokens + diagnostics.
    pub fn lex(mut self) -> LexResult {
        self.tokens.reserve(self.bytes.len().saturating_div(4).max(32));
        while self.i < self.bytes.len() {
            if self.in_code {
                self.lex_code_token();
            } else {
                self.lex_inline_html();
            }
        }
        LexResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn lex_inline_html(&mut self) {
        let start = self.i;
        let mut j = self.i;
        while j < self.bytes.len() {
            if self.bytes[j] == b'<' {
                if let Some((kind, len)) = self.open_tag_at(j) {
                    if j > start {
                        self.push(TokenKind::InlineHtml, start, j);
                    }
                    self.i = j + len;
                    self.push(kind, j, self.i);
                    self.in_code = true;
                    return;
                }
            }
            j += 1;
        }
        self.i = self.bytes.len();
        self.push(TokenKind::InlineHtml, start, self.i);
    }

    /// Open tag starting at `j`, with its byte length (including the one trailing newline or
    /// space PHP folds into `<?php`).
    fn open_tag_at(&self, j: usize) -> Option<(TokenKind, usize)> {
        let rest = &self.bytes[j..];
        if rest.starts_with(b"<?=") {
            return Some((TokenKind::OpenTagWithEcho, 3));
        }
        if rest.len() >= 5 && rest[..5].eq_ignore_ascii_case(b"<?php") {
            return match rest.get(5) {
                None => Some((TokenKind::OpenTag, 5)),
                Some(b'\n' | b' ' | b'\t') => Some((TokenKind::OpenTag, 6)),
                Some(b'\r') if rest.get(6) == Some(&b'\n') => Some((TokenKind::OpenTag, 7)),
                Some(b'\r') => Some((TokenKind::OpenTag, 6)),
                Some(_) if self.options.short_open_tag => Some((TokenKind::OpenTag, 2)),
                Some(_) => None,
            };
        }
        if self.options.short_open_tag && rest.starts_with(b"<?") {
            return Some((TokenKind::OpenTag, 2));
        }
        None
    }

    fn lex_code_token(&mut self) {
        let start = self.i;
        let Some(c) = self.peek_char() else {
            self.i = self.bytes.len();
            return;
        };
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                while matches!(self.peek_byte(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
                    self.i += 1;
                }
                self.push(TokenKind::Whitespace, start, self.i);
            }
            '/' if self.peek_str("//") => self.lex_line_comment(),
            '/' if self.peek_str("/*") => self.lex_block_comment(),
            '#' if self.peek_str("#[") => {
                self.i += 2;
                self.push(TokenKind::Attribute, start, self.i);
            }
            '#' => self.lex_line_comment(),
            '?' if self.peek_str("?>") => {
                self.i += 2;
                if self.peek_str("\r\n") {
                    self.i += 2;
                } else if self.peek_byte() == Some(b'\n') {
                    self.i += 1;
                }
                self.push(TokenKind::CloseTag, start, self.i);
                self.in_code = false;
            }
            '?' if self.peek_str("?->") => {
                self.i += 3;
                self.push(TokenKind::NullsafeArrow, start, self.i);
            }
            '-' if self.peek_str("->") => {
                self.i += 2;
                self.push(TokenKind::Arrow, start, self.i);
            }
            ':' if self.peek_str("::") => {
                self.i += 2;
                self.push(TokenKind::DoubleColon, start, self.i);
            }
            ';' | ',' | '{' | '}' | '(' | ')' | '[' | ']' => {
                self.i += 1;
                let kind = match c {
                    ';' => TokenKind::Semicolon,
                    ',' => TokenKind::Comma,
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    '[' => TokenKind::LBracket,
                    _ => TokenKind::RBracket,
                };
                self.push(kind, start, self.i);
            }
            '$' if self.char_at(self.i + 1).is_some_and(is_ident_start) => {
                self.i += 1;
                self.eat_label();
                self.push(TokenKind::Variable, start, self.i);
            }
            '\'' | '"' | '`' => {
                self.i += 1;
                if !self.skip_quoted(c) {
                    self.diagnostics.push(
                        Diagnostic::error_kind(
                            DiagnosticKind::UnterminatedString,
                            Some(Span::new(start as u32, self.i as u32)),
                        )
                        .with_code(codes::UNTERMINATED_LITERAL),
                    );
                }
                self.push(TokenKind::StringLiteral, start, self.i);
            }
            '<' if self.peek_str("<<<") && self.lex_heredoc() => {}
            '\\' if self.char_at(self.i + 1).is_some_and(is_ident_start) => {
                self.i += 1;
                self.eat_label();
                self.eat_name_segments();
                self.push(TokenKind::NameFullyQualified, start, self.i);
            }
            '\\' => {
                self.i += 1;
                self.push(TokenKind::NsSeparator, start, self.i);
            }
            '.' if self.char_at(self.i + 1).is_some_and(|d| d.is_ascii_digit()) => {
                self.lex_number();
            }
            ch if ch.is_ascii_digit() => self.lex_number(),
            ch if is_ident_start(ch) => self.lex_name(),
            '!' | '%' | '&' | '*' | '+' | '-' | '=' | '|' | '^' | '~' | '@' | '.' | '<' | '>'
            | '?' | ':' | '/' | '$' => {
                self.i += 1;
                self.push(TokenKind::Punct, start, self.i);
            }
            other => {
                self.i += other.len_utf8();
                self.diagnostics.push(
                    Diagnostic::error_kind(
                        DiagnosticKind::UnexpectedChar(other),
                        Some(Span::new(start as u32, self.i as u32)),
                    )
                    .with_code(codes::UNEXPECTED_CHAR),
                );
                self.push(TokenKind::Unknown, start, self.i);
            }
        }
    }

    /// `//` or `#` comment. Ends before the newline or before `?>`.
    fn lex_line_comment(&mut self) {
        let start = self.i;
        while let Some(b) = self.peek_byte() {
            if b == b'\n' || b == b'\r' || self.peek_str("?>") {
                break;
            }
            self.i += self.peek_char().map_or(1, char::len_utf8);
        }
        self.push(TokenKind::Comment, start, self.i);
    }

    fn lex_block_comment(&mut self) {
        let start = self.i;
        let is_doc = self.peek_str("/**")
            && matches!(
                self.bytes.get(start + 3),
                Some(b' ' | b'\t' | b'\n' | b'\r')
            );
        self.i += 2;
        match self.input[self.i..].find("*/") {
            Some(end) => self.i += end + 2,
            None => {
                self.i = self.bytes.len();
                self.diagnostics.push(Diagnostic::error_kind(
                    DiagnosticKind::UnterminatedBlockComment,
                    Some(Span::new(start as u32, self.i as u32)),
                ));
            }
        }
        let kind = if is_doc {
            TokenKind::DocComment
        } else {
            TokenKind::Comment
        };
        self.push(kind, start, self.i);
    }

    /// Skips a quoted string body; `self.i` is just past the opening quote. Double-quoted and
    /// backtick strings may contain `{$ ... }` blocks whose own quotes do not close the string.
    fn skip_quoted(&mut self, quote: char) -> bool {
        let quote = quote as u8;
        while let Some(b) = self.peek_byte() {
            match b {
                b'\\' => {
                    self.i += 1;
                    if let Some(ch) = self.peek_char() {
                        self.i += ch.len_utf8();
                    }
                }
                b'{' if quote != b'\'' && self.bytes.get(self.i + 1) == Some(&b'$') => {
                    self.i += 1;
                    if !self.skip_interpolation() {
                        return false;
                    }
                }
                _ if b == quote => {
                    self.i += 1;
                    return true;
                }
                _ => self.i += self.peek_char().map_or(1, char::len_utf8),
            }
        }
        false
    }

    /// Skips a `{$ ... }` block; `self.i` is just past the `{`.
    fn skip_interpolation(&mut self) -> bool {
        let mut depth = 1u32;
        while let Some(b) = self.peek_byte() {
            match b {
                b'{' => {
                    depth += 1;
                    self.i += 1;
                }
                b'}' => {
                    self.i += 1;
                    depth -= 1;
                    if depth == 0 {
                        return true;
                    }
                }
                b'\'' | b'"' => {
                    self.i += 1;
                    if !self.skip_quoted(b as char) {
                        return false;
                    }
                }
                _ => self.i += self.peek_char().map_or(1, char::len_utf8),
            }
        }
        false
    }

    /// Heredoc (`<<<ID`, `<<<"ID"`) or nowdoc (`<<<'ID'`). Returns `false` without consuming
    /// anything when the opener is malformed, so the caller falls back to punctuation.
    fn lex_heredoc(&mut self) -> bool {
        let start = self.i;
        let mut j = start + 3;
        while matches!(self.bytes.get(j), Some(b' ' | b'\t')) {
            j += 1;
        }
        let quote = match self.bytes.get(j) {
            Some(q @ (b'\'' | b'"')) => {
                j += 1;
                Some(*q)
            }
            _ => None,
        };
        let label_start = j;
        if !self.char_at(j).is_some_and(is_ident_start) {
            return false;
        }
        while let Some(ch) = self.char_at(j).filter(|c| is_ident_continue(*c)) {
            j += ch.len_utf8();
        }
        let label = &self.input[label_start..j];
        if let Some(q) = quote {
            if self.bytes.get(j) != Some(&q) {
                return false;
            }
            j += 1;
        }
        match self.bytes.get(j) {
            Some(b'\n') => j += 1,
            Some(b'\r') if self.bytes.get(j + 1) == Some(&b'\n') => j += 2,
            _ => return false,
        }

        self.i = j;
        while self.i < self.bytes.len() {
            let mut k = self.i;
            while matches!(self.bytes.get(k), Some(b' ' | b'\t')) {
                k += 1;
            }
            if self.input[k..].starts_with(label)
                && !self
                    .char_at(k + label.len())
                    .is_some_and(is_ident_continue)
            {
                self.i = k + label.len();
                self.push(TokenKind::Heredoc, start, self.i);
                return true;
            }
            match self.input[self.i..].find('\n') {
                Some(nl) => self.i += nl + 1,
                None => self.i = self.bytes.len(),
            }
        }
        self.diagnostics.push(
            Diagnostic::error_kind(
                DiagnosticKind::UnterminatedHeredoc(label.to_string()),
                Some(Span::new(start as u32, self.i as u32)),
            )
            .with_code(codes::UNTERMINATED_LITERAL),
        );
        self.push(TokenKind::Heredoc, start, self.i);
        true
    }

    fn lex_number(&mut self) {
        let start = self.i;
        let radix_prefixed = ["0x", "0X", "0b", "0B", "0o", "0O"]
            .iter()
            .any(|p| self.peek_str(p));
        if radix_prefixed {
            self.i += 2;
            while matches!(self.peek_byte(), Some(b) if b.is_ascii_alphanumeric() || b == b'_') {
                self.i += 1;
            }
            self.push(TokenKind::Number, start, self.i);
            return;
        }

        self.eat_digits();
        if self.peek_byte() == Some(b'.')
            && self
                .bytes
                .get(self.i + 1)
                .is_none_or(|b| b.is_ascii_digit() || !b.is_ascii_punctuation())
        {
            self.i += 1;
            self.eat_digits();
        }
        if matches!(self.peek_byte(), Some(b'e' | b'E')) {
            let mut k = self.i + 1;
            if matches!(self.bytes.get(k), Some(b'+' | b'-')) {
                k += 1;
            }
            if self.bytes.get(k).is_some_and(u8::is_ascii_digit) {
                self.i = k;
                self.eat_digits();
            }
        }
        self.push(TokenKind::Number, start, self.i);
    }

    fn eat_digits(&mut self) {
        while matches!(self.peek_byte(), Some(b) if b.is_ascii_digit() || b == b'_') {
            self.i += 1;
        }
    }

    /// Identifier, keyword, or qualified/relative name.
    fn lex_name(&mut self) {
        let start = self.i;
        self.eat_label();
        let first = &self.input[start..self.i];
        if self.eat_name_segments() {
            let kind = if first.eq_ignore_ascii_case("namespace") {
                TokenKind::NameRelative
            } else {
                TokenKind::NameQualified
            };
            self.push(kind, start, self.i);
            return;
        }
        let after_member_access = matches!(
            self.last_sig_kind,
            Some(TokenKind::Arrow | TokenKind::NullsafeArrow | TokenKind::DoubleColon)
        );
        let kind = if after_member_access {
            TokenKind::Ident
        } else {
            keywords::lookup(first).unwrap_or(TokenKind::Ident)
        };
        self.push(kind, start, self.i);
    }

    fn eat_label(&mut self) {
        while let Some(ch) = self.peek_char().filter(|c| is_ident_continue(*c)) {
            self.i += ch.len_utf8();
        }
    }

    /// Consumes `\Label` segments; returns whether any were present.
    fn eat_name_segments(&mut self) -> bool {
        let mut any = false;
        while self.peek_byte() == Some(b'\\') && self.char_at(self.i + 1).is_some_and(is_ident_start)
        {
            self.i += 1;
            self.eat_label();
            any = true;
        }
        any
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens
            .push(Token::new(kind, Span::new(start as u32, end as u32)));
        if !kind.is_trivia() {
            self.last_sig_kind = Some(kind);
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.i).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.char_at(self.i)
    }

    fn char_at(&self, j: usize) -> Option<char> {
        self.input.get(j..)?.chars().next()
    }

    fn peek_str(&self, s: &str) -> bool {
        self.bytes[self.i..].starts_with(s.as_bytes())
    }
}
