/// PHP label start: `[a-zA-Z_\x80-\xff]`. Every non-ASCII char qualifies because each of its
/// UTF-8 bytes is in the high range.
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic() || !c.is_ascii()
}

pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_php_rules() {
        assert!(is_ident_start('_'));
        assert!(is_ident_start('é'));
        assert!(!is_ident_start('1'));
        assert!(is_ident_continue('1'));
        assert!(!is_ident_continue('\\'));
        assert!(!is_ident_continue('$'));
    }
}
