//! Syntax tokenization seam for module source rendering.
//!
//! The linker only needs lines of `{text, category-tags}` tokens, so the
//! highlighting engine sits behind the narrow [`Tokenizer`] trait. Any engine
//! that can tag class names and constants can drive the view; the built-in
//! [`MoveTokenizer`] is a small line-oriented lexer good enough for Move and
//! Rust-like disassembly output.

use serde::Serialize;

/// Lexical category tags attached to a token.
///
/// Serialized with the conventional highlighter class names
/// (`"class-name"`, `"constant"`, ...). Only `ClassName` and `Constant`
/// participate in link resolution; the rest exist for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenCategory {
    Plain,
    Keyword,
    ClassName,
    Constant,
    Function,
    Number,
    String,
    Comment,
    Operator,
    Punctuation,
}

impl TokenCategory {
    /// Conventional highlighter class name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Plain => "plain",
            TokenCategory::Keyword => "keyword",
            TokenCategory::ClassName => "class-name",
            TokenCategory::Constant => "constant",
            TokenCategory::Function => "function",
            TokenCategory::Number => "number",
            TokenCategory::String => "string",
            TokenCategory::Comment => "comment",
            TokenCategory::Operator => "operator",
            TokenCategory::Punctuation => "punctuation",
        }
    }
}

/// One lexical token: a slice of source text plus its category tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub content: String,
    pub categories: Vec<TokenCategory>,
}

impl Token {
    pub fn new(content: impl Into<String>, category: TokenCategory) -> Self {
        Self {
            content: content.into(),
            categories: vec![category],
        }
    }

    pub fn has_category(&self, category: TokenCategory) -> bool {
        self.categories.contains(&category)
    }
}

/// Pluggable tokenizer producing ordered lines of categorized tokens.
///
/// Concatenating the token contents of a line must reproduce that line, so
/// the renderer can emit the source verbatim.
pub trait Tokenizer {
    fn tokenize(&self, source: &str) -> Vec<Vec<Token>>;
}

/// Built-in line-oriented lexer for Move source and Move/Rust-like
/// disassembly.
///
/// Handles line and block comments (block state carries across lines),
/// string literals, numeric and `0x..` address literals, keywords, and the
/// identifier classes the linker consumes: leading-uppercase names are
/// tagged `class-name`, ALL_CAPS names `constant`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveTokenizer;

const KEYWORDS: &[&str] = &[
    "module", "script", "fun", "public", "entry", "native", "friend", "use", "as", "has", "copy",
    "drop", "store", "key", "struct", "enum", "let", "mut", "const", "if", "else", "while", "loop",
    "for", "in", "return", "abort", "break", "continue", "move", "spec", "acquires", "phantom",
    "true", "false", "address", "vector", "fn", "pub", "impl", "trait", "match", "where",
];

fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

// Prism-style constant: [A-Z_][A-Z_0-9]+, at least two characters.
fn is_constant_like(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    word.len() >= 2
        && (first.is_ascii_uppercase() || first == '_')
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn is_punctuation(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | '[' | ']' | ',' | ';' | '.')
}

fn is_operator(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '=' | '!' | '<' | '>' | '&' | '|' | '^' | ':' | '#' | '?' | '@'
    )
}

impl Tokenizer for MoveTokenizer {
    fn tokenize(&self, source: &str) -> Vec<Vec<Token>> {
        let mut in_block_comment = false;
        source
            .lines()
            .map(|line| tokenize_line(line, &mut in_block_comment))
            .collect()
    }
}

fn tokenize_line(line: &str, in_block_comment: &mut bool) -> Vec<Token> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let start = i;

        if *in_block_comment {
            while i < chars.len() {
                if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                    i += 2;
                    *in_block_comment = false;
                    break;
                }
                i += 1;
            }
            tokens.push(collect(&chars, start, i, TokenCategory::Comment));
            continue;
        }

        let c = chars[i];

        if c.is_whitespace() {
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            tokens.push(collect(&chars, start, i, TokenCategory::Plain));
        } else if c == '/' && chars.get(i + 1) == Some(&'/') {
            i = chars.len();
            tokens.push(collect(&chars, start, i, TokenCategory::Comment));
        } else if c == '/' && chars.get(i + 1) == Some(&'*') {
            i += 2;
            *in_block_comment = true;
            while i < chars.len() {
                if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                    i += 2;
                    *in_block_comment = false;
                    break;
                }
                i += 1;
            }
            tokens.push(collect(&chars, start, i, TokenCategory::Comment));
        } else if c == '"' {
            i += 1;
            while i < chars.len() && chars[i] != '"' {
                // skip escaped characters inside the literal
                i += if chars[i] == '\\' { 2 } else { 1 };
            }
            if i < chars.len() {
                i += 1;
            }
            tokens.push(collect(&chars, start, i.min(chars.len()), TokenCategory::String));
        } else if c.is_ascii_digit() {
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            tokens.push(collect(&chars, start, i, TokenCategory::Number));
        } else if c.is_alphabetic() || c == '_' {
            i += 1;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let category = classify_word(&word, next_non_space(&chars, i));
            tokens.push(Token {
                content: word,
                categories: vec![category],
            });
        } else if is_punctuation(c) {
            i += 1;
            tokens.push(collect(&chars, start, i, TokenCategory::Punctuation));
        } else if is_operator(c) {
            while i < chars.len() && is_operator(chars[i]) {
                i += 1;
            }
            tokens.push(collect(&chars, start, i, TokenCategory::Operator));
        } else {
            i += 1;
            tokens.push(collect(&chars, start, i, TokenCategory::Plain));
        }
    }

    tokens
}

fn collect(chars: &[char], start: usize, end: usize, category: TokenCategory) -> Token {
    Token::new(chars[start..end].iter().collect::<String>(), category)
}

fn next_non_space(chars: &[char], mut i: usize) -> Option<char> {
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    chars.get(i).copied()
}

fn classify_word(word: &str, following: Option<char>) -> TokenCategory {
    if is_keyword(word) {
        TokenCategory::Keyword
    } else if is_constant_like(word) {
        TokenCategory::Constant
    } else if word.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        TokenCategory::ClassName
    } else if following == Some('(') {
        TokenCategory::Function
    } else {
        TokenCategory::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(source: &str) -> Vec<Vec<Token>> {
        MoveTokenizer.tokenize(source)
    }

    fn categories_of(line: &[Token]) -> Vec<(String, TokenCategory)> {
        line.iter()
            .map(|t| (t.content.clone(), t.categories[0]))
            .collect()
    }

    #[test]
    fn test_lines_reconstruct_source() {
        let source = "public fun value(self: &Coin<SUI>): u64 {\n    self.balance // in MIST\n}";
        for (line, tokens) in source.lines().zip(tokenize(source)) {
            let joined: String = tokens.iter().map(|t| t.content.as_str()).collect();
            assert_eq!(joined, line);
        }
    }

    #[test]
    fn test_class_name_and_constant_tagging() {
        let lines = tokenize("fun split(coin: &mut Coin<SUI>)");
        let tags = categories_of(&lines[0]);
        assert!(tags.contains(&("Coin".to_string(), TokenCategory::ClassName)));
        assert!(tags.contains(&("SUI".to_string(), TokenCategory::Constant)));
        assert!(tags.contains(&("fun".to_string(), TokenCategory::Keyword)));
        assert!(tags.contains(&("coin".to_string(), TokenCategory::Plain)));
    }

    #[test]
    fn test_function_call_tagging() {
        let lines = tokenize("transfer(coin, recipient);");
        assert_eq!(lines[0][0].content, "transfer");
        assert!(lines[0][0].has_category(TokenCategory::Function));
    }

    #[test]
    fn test_numbers_and_address_literals() {
        let lines = tokenize("let x = 100u64; use 0x2::coin;");
        let tags = categories_of(&lines[0]);
        assert!(tags.contains(&("100u64".to_string(), TokenCategory::Number)));
        assert!(tags.contains(&("0x2".to_string(), TokenCategory::Number)));
    }

    #[test]
    fn test_line_comment_swallows_rest_of_line() {
        let lines = tokenize("let x = 1; // Coin is not a link here");
        let comment = lines[0].last().unwrap();
        assert!(comment.has_category(TokenCategory::Comment));
        assert!(comment.content.contains("Coin"));
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let lines = tokenize("a /* first\nstill comment\nend */ b");
        assert_eq!(lines.len(), 3);
        assert!(lines[1][0].has_category(TokenCategory::Comment));
        assert_eq!(lines[1][0].content, "still comment");
        // closing line resumes normal tokenization after "*/"
        let last = &lines[2];
        assert!(last[0].has_category(TokenCategory::Comment));
        assert_eq!(last.last().unwrap().content, "b");
    }

    #[test]
    fn test_string_literal_with_escape() {
        let lines = tokenize(r#"let s = "a\"Coin\"";"#);
        let string = lines[0]
            .iter()
            .find(|t| t.has_category(TokenCategory::String))
            .unwrap();
        assert_eq!(string.content, r#""a\"Coin\"""#);
    }

    #[test]
    fn test_empty_line_has_no_tokens() {
        let lines = tokenize("a\n\nb");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
    }
}
