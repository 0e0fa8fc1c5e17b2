use phf::phf_set;

/// Every operator and delimiter, matched longest-first by the lexer.
pub(crate) static OPERATORS: phf::Set<&'static str> = phf_set! {
    "!=", "%", "%=", "&", "&=", "(", ")", "*", "**", "**=", "*=", "+", "+=",
    ",", "-", "-=", "->", ".", "...", "/", "//", "//=", "/=", ":", ":=", ";",
    "<", "<<", "<<=", "<=", "=", "==", ">", ">=", ">>", ">>=", "@", "@=",
    "[", "]", "^", "^=", "{", "|", "|=", "}", "~",
};

/// Longest operator in `OPERATORS`, in bytes.
pub(crate) const MAX_OPERATOR_LEN: usize = 3;

/// String prefixes, lowercased. Matching is case-insensitive.
pub(crate) static STRING_PREFIXES: phf::Set<&'static str> = phf_set! {
    "b", "r", "u", "f", "br", "rb", "fr", "rf",
};
