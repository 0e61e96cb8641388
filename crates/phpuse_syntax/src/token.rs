//! Token definitions.
//!
//! Classified PHP tokens. Only the kinds the use-statement scanner cares about get their own
//! variant; everything else collapses into a handful of catch-all kinds.
use crate::Span;

/// Token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Text outside `<?php ... ?>`.
    InlineHtml,
    /// `<?php` (or `<?` with short tags enabled).
    OpenTag,
    /// `<?=`
    OpenTagWithEcho,
    /// `?>`
    CloseTag,
    /// Spaces, tabs and newlines.
    Whitespace,
    /// `// ...`, `# ...`, `/* ... */`
    Comment,
    /// `/** ... */`
    DocComment,

    /// Unqualified identifier: `Foo`.
    Ident,
    /// `\` not followed by an identifier.
    NsSeparator,
    /// `Foo\Bar`
    NameQualified,
    /// `\Foo\Bar`
    NameFullyQualified,
    /// `namespace\Foo`
    NameRelative,
    /// `$name`
    Variable,
    /// Integer or float literal.
    Number,
    /// Single- or double-quoted string.
    StringLiteral,
    /// Heredoc or nowdoc body including its markers.
    Heredoc,

    /// `use`
    KwUse,
    /// `as`
    KwAs,
    /// `function`
    KwFunction,
    /// `const`
    KwConst,
    /// `namespace`
    KwNamespace,
    /// Any other reserved word.
    Keyword,

    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `#[`
    Attribute,
    /// `->`
    Arrow,
    /// `?->`
    NullsafeArrow,
    /// `::`
    DoubleColon,
    /// Any other operator character.
    Punct,

    /// Byte the lexer could not classify.
    Unknown,
}

impl TokenKind {
    /// Kinds whose raw text forms part of an imported name.
    pub fn is_name_part(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::NsSeparator
                | TokenKind::NameQualified
                | TokenKind::NameFullyQualified
                | TokenKind::NameRelative
        )
    }

    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }
}

/// Token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Span in source text.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Raw text of the token within `input`.
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        self.span.text(input)
    }
}
