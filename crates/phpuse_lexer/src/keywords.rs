use phf::phf_map;
use phpuse_syntax::TokenKind;

/// Reserved words, keyed by lowercase spelling.
pub(crate) static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "use" => TokenKind::KwUse,
    "as" => TokenKind::KwAs,
    "function" => TokenKind::KwFunction,
    "const" => TokenKind::KwConst,
    "namespace" => TokenKind::KwNamespace,

    "abstract" => TokenKind::Keyword,
    "and" => TokenKind::Keyword,
    "array" => TokenKind::Keyword,
    "break" => TokenKind::Keyword,
    "callable" => TokenKind::Keyword,
    "case" => TokenKind::Keyword,
    "catch" => TokenKind::Keyword,
    "class" => TokenKind::Keyword,
    "clone" => TokenKind::Keyword,
    "continue" => TokenKind::Keyword,
    "declare" => TokenKind::Keyword,
    "default" => TokenKind::Keyword,
    "die" => TokenKind::Keyword,
    "do" => TokenKind::Keyword,
    "echo" => TokenKind::Keyword,
    "else" => TokenKind::Keyword,
    "elseif" => TokenKind::Keyword,
    "empty" => TokenKind::Keyword,
    "enddeclare" => TokenKind::Keyword,
    "endfor" => TokenKind::Keyword,
    "endforeach" => TokenKind::Keyword,
    "endif" => TokenKind::Keyword,
    "endswitch" => TokenKind::Keyword,
    "endwhile" => TokenKind::Keyword,
    "eval" => TokenKind::Keyword,
    "exit" => TokenKind::Keyword,
    "extends" => TokenKind::Keyword,
    "final" => TokenKind::Keyword,
    "finally" => TokenKind::Keyword,
    "fn" => TokenKind::Keyword,
    "for" => TokenKind::Keyword,
    "foreach" => TokenKind::Keyword,
    "global" => TokenKind::Keyword,
    "goto" => TokenKind::Keyword,
    "if" => TokenKind::Keyword,
    "implements" => TokenKind::Keyword,
    "include" => TokenKind::Keyword,
    "include_once" => TokenKind::Keyword,
    "instanceof" => TokenKind::Keyword,
    "insteadof" => TokenKind::Keyword,
    "interface" => TokenKind::Keyword,
    "isset" => TokenKind::Keyword,
    "list" => TokenKind::Keyword,
    "match" => TokenKind::Keyword,
    "new" => TokenKind::Keyword,
    "or" => TokenKind::Keyword,
    "print" => TokenKind::Keyword,
    "private" => TokenKind::Keyword,
    "protected" => TokenKind::Keyword,
    "public" => TokenKind::Keyword,
    "readonly" => TokenKind::Keyword,
    "require" => TokenKind::Keyword,
    "require_once" => TokenKind::Keyword,
    "return" => TokenKind::Keyword,
    "static" => TokenKind::Keyword,
    "switch" => TokenKind::Keyword,
    "throw" => TokenKind::Keyword,
    "trait" => TokenKind::Keyword,
    "try" => TokenKind::Keyword,
    "unset" => TokenKind::Keyword,
    "var" => TokenKind::Keyword,
    "while" => TokenKind::Keyword,
    "xor" => TokenKind::Keyword,
    "yield" => TokenKind::Keyword,
    "__halt_compiler" => TokenKind::Keyword,
    "__class__" => TokenKind::Keyword,
    "__dir__" => TokenKind::Keyword,
    "__file__" => TokenKind::Keyword,
    "__function__" => TokenKind::Keyword,
    "__line__" => TokenKind::Keyword,
    "__method__" => TokenKind::Keyword,
    "__namespace__" => TokenKind::Keyword,
    "__trait__" => TokenKind::Keyword,
};

/// Longest entry in `KEYWORDS`; longer labels skip the lookup.
pub(crate) const MAX_KEYWORD_LEN: usize = 15;

pub(crate) fn lookup(label: &str) -> Option<TokenKind> {
    if label.len() > MAX_KEYWORD_LEN || !label.is_ascii() {
        return None;
    }
    KEYWORDS.get(label.to_ascii_lowercase().as_str()).copied()
}
