use phpuse_lexer::Lexer;
use phpuse_syntax::TokenKind;

fn significant(src: &str) -> Vec<TokenKind> {
    Lexer::new(src)
        .lex()
        .tokens
        .iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia())
        .collect()
}

#[test]
fn use_statement_punctuation() {
    assert_eq!(
        significant("<?php use A\\{B, C as D};"),
        vec![
            TokenKind::OpenTag,
            TokenKind::KwUse,
            TokenKind::Ident,
            TokenKind::NsSeparator,
            TokenKind::LBrace,
            TokenKind::Ident,
            TokenKind::Comma,
            TokenKind::Ident,
            TokenKind::KwAs,
            TokenKind::Ident,
            TokenKind::RBrace,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn closure_use_clause() {
    let kinds = significant("<?php $f = function () use ($x) { return $x; };");
    assert!(kinds.contains(&TokenKind::KwFunction));
    assert!(kinds.contains(&TokenKind::KwUse));
    assert!(kinds.contains(&TokenKind::Variable));
    assert!(kinds.contains(&TokenKind::Keyword));
}

#[test]
fn nullsafe_and_static_access() {
    let kinds = significant("<?php $a?->b; A::B;");
    assert!(kinds.contains(&TokenKind::NullsafeArrow));
    assert!(kinds.contains(&TokenKind::DoubleColon));
}

#[test]
fn stray_backslash_is_separator() {
    let kinds = significant("<?php \\ ;");
    assert_eq!(kinds[1], TokenKind::NsSeparator);
}
