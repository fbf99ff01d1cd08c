//! Tokenizer for algorithm descriptions.
//!
//! Uses Logos for compile-time generated tokenization.

use logos::Logos;

/// Token of the description language.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token("=")]
    Assign,

    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    /// Character literal, quotes stripped.
    #[regex(r"'([^'\\\n]|\\.)+'", |lex| trim_quotes(lex.slice()))]
    Character(&'src str),

    /// String literal, quotes stripped.
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| trim_quotes(lex.slice()))]
    String(&'src str),

    #[regex(r"-?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?[fFdD]?", |lex| lex.slice())]
    #[regex(r"-?[0-9]+[eE][+-]?[0-9]+[fFdD]?", |lex| lex.slice())]
    #[regex(r"-?[0-9]+[fFdD]", |lex| lex.slice())]
    Float(&'src str),

    #[regex(r"-?[0-9]+", |lex| lex.slice())]
    Integer(&'src str),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'src str),
}

fn trim_quotes(slice: &str) -> &str {
    &slice[1..slice.len() - 1]
}

impl Token<'_> {
    /// Short description used in syntax error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::LParen => "'('".into(),
            Token::RParen => "')'".into(),
            Token::LBracket => "'['".into(),
            Token::RBracket => "']'".into(),
            Token::Comma => "','".into(),
            Token::Assign => "'='".into(),
            Token::True => "'true'".into(),
            Token::False => "'false'".into(),
            Token::Null => "'null'".into(),
            Token::Character(text) => format!("character literal '{text}'"),
            Token::String(text) => format!("string literal \"{text}\""),
            Token::Float(text) => format!("float literal {text}"),
            Token::Integer(text) => format!("integer literal {text}"),
            Token::Ident(name) => format!("identifier {name}"),
        }
    }
}
