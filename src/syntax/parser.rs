//! Recursive-descent parser producing [`ComponentNode`] trees.
//!
//! ```text
//! component := IDENT '(' ( property (',' property)* )? ')'
//! property  := IDENT '=' value
//! value     := literal | component
//! literal   := bool | char | int | float | string | 'null' | '[' (value (',' value)*)? ']'
//! ```

use super::lexer::Token;
use super::types::{ComponentNode, Literal, LiteralNode, PropertyNode, PropertyValue, Span};
use crate::error::{AutoconfigError, Result};
use logos::Logos;

/// Hard ceiling on component and array nesting, whatever the configured
/// limit.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Effective nesting limit for a configured `max_depth`; `0` and values
/// above [`MAX_NESTING_DEPTH`] map to the ceiling.
pub(crate) fn nesting_limit(max_depth: usize) -> usize {
    if max_depth == 0 {
        MAX_NESTING_DEPTH
    } else {
        max_depth.min(MAX_NESTING_DEPTH)
    }
}

/// Parses a full description; trailing input is an error.
///
/// Nesting is limited to [`MAX_NESTING_DEPTH`].
///
/// # Examples
///
/// ```
/// use u_autoconfig::syntax::parse_description;
///
/// let root =
///     parse_description("SimpleAlgorithm(constructive=Greedy(), improver=NullImprover())")
///         .unwrap();
/// assert_eq!(root.name, "SimpleAlgorithm");
/// assert_eq!(root.properties.len(), 2);
/// ```
pub fn parse_description(source: &str) -> Result<ComponentNode> {
    parse_description_with_depth(source, MAX_NESTING_DEPTH)
}

/// Like [`parse_description`], but fails with
/// [`AutoconfigError::NestingTooDeep`] once components and arrays nest
/// deeper than `max_depth`. The root component is depth 1.
pub fn parse_description_with_depth(source: &str, max_depth: usize) -> Result<ComponentNode> {
    let mut parser = Parser::new(source, nesting_limit(max_depth))?;
    let root = parser.component()?;
    if let Some((token, span)) = parser.peek() {
        return Err(AutoconfigError::Syntax {
            span: *span,
            message: format!("unexpected {} after end of description", token.describe()),
        });
    }
    Ok(root)
}

struct Parser<'src> {
    tokens: Vec<(Token<'src>, Span)>,
    pos: usize,
    eof: Span,
    depth: usize,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, max_depth: usize) -> Result<Self> {
        let mut tokens = Vec::new();
        for (token, range) in Token::lexer(source).spanned() {
            let span = Span::new(range.start, range.end);
            match token {
                Ok(token) => tokens.push((token, span)),
                Err(()) => {
                    return Err(AutoconfigError::Syntax {
                        span,
                        message: format!("unrecognized input {:?}", &source[range]),
                    })
                }
            }
        }
        Ok(Self {
            tokens,
            pos: 0,
            eof: Span::new(source.len(), source.len()),
            depth: 0,
            max_depth,
        })
    }

    fn descend(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            let span = self.peek().map_or(self.eof, |(_, span)| *span);
            return Err(AutoconfigError::NestingTooDeep {
                max_depth: self.max_depth,
            }
            .at(span));
        }
        self.depth += 1;
        Ok(())
    }

    fn peek(&self) -> Option<&(Token<'src>, Span)> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<(Token<'src>, Span)> {
        match self.tokens.get(self.pos) {
            Some(entry) => {
                self.pos += 1;
                Ok(entry.clone())
            }
            None => Err(AutoconfigError::Syntax {
                span: self.eof,
                message: "unexpected end of description".into(),
            }),
        }
    }

    fn expect(&mut self, expected: Token<'static>) -> Result<Span> {
        let (token, span) = self.next()?;
        if token == expected {
            Ok(span)
        } else {
            Err(unexpected(&token, span, &expected.describe()))
        }
    }

    fn ident(&mut self, what: &str) -> Result<(&'src str, Span)> {
        match self.next()? {
            (Token::Ident(name), span) => Ok((name, span)),
            (token, span) => Err(unexpected(&token, span, what)),
        }
    }

    fn component(&mut self) -> Result<ComponentNode> {
        self.descend()?;
        let node = self.component_body();
        self.depth -= 1;
        node
    }

    fn component_body(&mut self) -> Result<ComponentNode> {
        let (name, start) = self.ident("component name")?;
        self.expect(Token::LParen)?;

        let mut properties = Vec::new();
        if matches!(self.peek(), Some((Token::RParen, _))) {
            let end = self.expect(Token::RParen)?;
            return Ok(ComponentNode {
                name: name.to_string(),
                properties,
                span: start.join(end),
            });
        }

        loop {
            properties.push(self.property()?);
            match self.next()? {
                (Token::Comma, _) => continue,
                (Token::RParen, end) => {
                    return Ok(ComponentNode {
                        name: name.to_string(),
                        properties,
                        span: start.join(end),
                    })
                }
                (token, span) => return Err(unexpected(&token, span, "',' or ')'")),
            }
        }
    }

    fn property(&mut self) -> Result<PropertyNode> {
        let (name, start) = self.ident("property name")?;
        self.expect(Token::Assign)?;
        let value = self.value()?;
        Ok(PropertyNode {
            name: name.to_string(),
            span: start.join(value.span()),
            value,
        })
    }

    fn value(&mut self) -> Result<PropertyValue> {
        if matches!(self.peek(), Some((Token::Ident(_), _))) {
            return Ok(PropertyValue::Component(self.component()?));
        }
        if matches!(self.peek(), Some((Token::LBracket, _))) {
            return Ok(PropertyValue::Literal(self.array()?));
        }

        let (token, span) = self.next()?;
        let literal = match token {
            Token::True => Literal::Boolean("true".into()),
            Token::False => Literal::Boolean("false".into()),
            Token::Null => Literal::Null,
            Token::Character(text) => Literal::Character(text.to_string()),
            Token::String(text) => Literal::String(text.to_string()),
            Token::Integer(text) => Literal::Integer(text.to_string()),
            Token::Float(text) => Literal::Float(text.to_string()),
            other => return Err(unexpected(&other, span, "a value")),
        };
        Ok(PropertyValue::Literal(LiteralNode::new(literal, span)))
    }

    fn array(&mut self) -> Result<LiteralNode> {
        self.descend()?;
        let node = self.array_body();
        self.depth -= 1;
        node
    }

    fn array_body(&mut self) -> Result<LiteralNode> {
        let start = self.expect(Token::LBracket)?;
        let mut elements = Vec::new();
        if matches!(self.peek(), Some((Token::RBracket, _))) {
            let end = self.expect(Token::RBracket)?;
            return Ok(LiteralNode::new(Literal::Array(elements), start.join(end)));
        }
        loop {
            elements.push(self.value()?);
            match self.next()? {
                (Token::Comma, _) => continue,
                (Token::RBracket, end) => {
                    return Ok(LiteralNode::new(Literal::Array(elements), start.join(end)))
                }
                (token, span) => return Err(unexpected(&token, span, "',' or ']'")),
            }
        }
    }
}

fn unexpected(token: &Token<'_>, span: Span, expected: &str) -> AutoconfigError {
    AutoconfigError::Syntax {
        span,
        message: format!("expected {expected}, found {}", token.describe()),
    }
}
