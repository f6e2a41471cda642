//! Recursive descent parser for style declaration blocks.
//!
//! Parses text such as `bgColor: #222; borderTop: [1, #f00]` into a list of
//! [`Declaration`]s, using the logos-based tokenizer from
//! [`crate::style::tokenizer`].

use crate::style::model::{Declaration, Value};
use crate::style::scalar::parse_percent;
use crate::style::tokenizer::{tokenize, Token};

/// Errors from declaration parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

/// A positioned token.
#[derive(Debug, Clone)]
struct PToken {
    token: Token,
    text: String,
    /// Index in the token stream (for error reporting).
    pos: usize,
}

fn tokenize_positioned(input: &str) -> Result<Vec<PToken>, ParseError> {
    let tokens = tokenize(input).map_err(|err| ParseError::UnexpectedToken {
        position: err.index,
        message: format!("unrecognized input '{}'", err.text),
    })?;
    Ok(tokens
        .into_iter()
        .enumerate()
        .map(|(pos, (token, text))| PToken { token, text, pos })
        .collect())
}

/// Parse a declaration block into declarations, in source order.
///
/// Semicolons separate declarations; a trailing semicolon is allowed.
pub fn parse_declarations(input: &str) -> Result<Vec<Declaration>, ParseError> {
    let mut parser = Parser {
        tokens: tokenize_positioned(input)?,
        cursor: 0,
    };

    let mut declarations = Vec::new();
    while !parser.is_eof() {
        if parser.eat(&Token::Semicolon) {
            continue;
        }
        declarations.push(parser.parse_declaration()?);
    }
    Ok(declarations)
}

struct Parser {
    tokens: Vec<PToken>,
    cursor: usize,
}

impl Parser {
    fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek(&self) -> Option<&PToken> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<PToken> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    /// Consume the next token if it matches `expected`.
    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek().is_some_and(|t| &t.token == expected) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<PToken, ParseError> {
        match self.advance() {
            Some(tok) if &tok.token == expected => Ok(tok),
            Some(tok) => Err(ParseError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected {:?}, got {:?} '{}'", expected, tok.token, tok.text),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {expected:?}"))),
        }
    }

    /// `name ':' value+`
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let name = self.expect(&Token::Ident)?;
        self.expect(&Token::Colon)?;

        let mut values = Vec::new();
        while let Some(tok) = self.peek() {
            if tok.token == Token::Semicolon {
                break;
            }
            values.push(self.parse_value()?);
        }

        if values.is_empty() {
            return Err(ParseError::UnexpectedEof(format!(
                "missing value for '{}'",
                name.text
            )));
        }
        Ok(Declaration::new(name.text, values))
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let tok = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expected a value".into()))?;

        match tok.token {
            Token::Number => tok
                .text
                .parse()
                .map(Value::Number)
                .map_err(|_| ParseError::UnexpectedToken {
                    position: tok.pos,
                    message: format!("invalid number '{}'", tok.text),
                }),
            Token::Percent => {
                parse_percent(&tok.text)
                    .map(Value::Percent)
                    .ok_or_else(|| ParseError::UnexpectedToken {
                        position: tok.pos,
                        message: format!(
                            "percent must be 1-3 digits followed by '%', got '{}'",
                            tok.text
                        ),
                    })
            }
            Token::HexColor => Ok(Value::Color(tok.text)),
            Token::Ident => Ok(Value::Ident(tok.text)),
            Token::StringLiteral => Ok(Value::Str(tok.text.trim_matches('"').to_string())),
            Token::BracketOpen => self.parse_list(),
            other => Err(ParseError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected a value, got {:?} '{}'", other, tok.text),
            }),
        }
    }

    /// Remainder of `'[' value (',' value)* ']'` after the opening bracket.
    fn parse_list(&mut self) -> Result<Value, ParseError> {
        let mut items = Vec::new();
        if self.eat(&Token::BracketClose) {
            return Ok(Value::List(items));
        }
        loop {
            items.push(self.parse_value()?);
            if self.eat(&Token::Comma) {
                continue;
            }
            self.expect(&Token::BracketClose)?;
            return Ok(Value::List(items));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input() {
        assert!(parse_declarations("").unwrap().is_empty());
        assert!(parse_declarations(" ; ; ").unwrap().is_empty());
    }

    #[test]
    fn single_declaration() {
        let decls = parse_declarations("paddingTop: 10").unwrap();
        assert_eq!(decls, vec![Declaration::new("paddingTop", vec![Value::Number(10.0)])]);
    }

    #[test]
    fn multiple_declarations_with_trailing_semicolon() {
        let decls = parse_declarations("bgColor: #222; height: 50%; align: center;").unwrap();
        assert_eq!(
            decls,
            vec![
                Declaration::new("bgColor", vec![Value::Color("#222".into())]),
                Declaration::new("height", vec![Value::Percent(50)]),
                Declaration::new("align", vec![Value::Ident("center".into())]),
            ]
        );
    }

    #[test]
    fn bracketed_border_pair() {
        let decls = parse_declarations("borderTop: [1, #ff0000]").unwrap();
        assert_eq!(
            decls[0].values,
            vec![Value::List(vec![
                Value::Number(1.0),
                Value::Color("#ff0000".into())
            ])]
        );
    }

    #[test]
    fn quoted_string_value() {
        let decls = parse_declarations(r#"font: "Menlo Bold""#).unwrap();
        assert_eq!(decls[0].values, vec![Value::Str("Menlo Bold".into())]);
    }

    #[test]
    fn percent_with_four_digits_is_rejected() {
        let err = parse_declarations("width: 1000%").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { position: 2, .. }));
    }

    #[test]
    fn missing_colon() {
        let err = parse_declarations("paddingTop 10").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn missing_value() {
        let err = parse_declarations("paddingTop: ;").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof(_)));
    }

    #[test]
    fn unterminated_list() {
        let err = parse_declarations("borderTop: [1, #fff").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof(_)));
    }

    #[test]
    fn unrecognized_characters_fail() {
        let err = parse_declarations("paddingTop: 10 @").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { position: 3, .. }));
        assert_eq!(
            err.to_string(),
            "unexpected token at position 3: unrecognized input '@'"
        );
    }

    #[test]
    fn detached_percent_sign_fails() {
        let err = parse_declarations("height: 50 %").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { position: 3, .. }));
    }

    #[test]
    fn stray_punctuation_as_value() {
        let err = parse_declarations("align: ,").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    }
}
