//! Recursive-descent parser from DSL tokens to a [`RuleAst`].

use crate::ast::{ActionAst, ConditionAst, Operator, ParamValue, RuleAst, Value};
use crate::error::DslError;
use crate::lexer::{Token, TokenKind};

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<Token, DslError> {
        if std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind) {
            Ok(self.advance())
        } else {
            Err(DslError::Syntax {
                line: self.peek().line,
                message: format!("expected {kind:?}, found {:?}", self.peek().kind),
            })
        }
    }

    fn expect_string(&mut self) -> Result<String, DslError> {
        match self.advance().kind {
            TokenKind::String(s) => Ok(s),
            other => Err(DslError::Syntax {
                line: self.peek().line,
                message: format!("expected string literal, found {other:?}"),
            }),
        }
    }

    fn expect_identifier(&mut self) -> Result<String, DslError> {
        match self.advance().kind {
            TokenKind::Identifier(s) => Ok(s),
            other => Err(DslError::Syntax {
                line: self.peek().line,
                message: format!("expected identifier, found {other:?}"),
            }),
        }
    }

    fn parse_rule(&mut self) -> Result<RuleAst, DslError> {
        let start_line = self.peek().line;
        self.expect(&TokenKind::Rule)?;
        let name = self.expect_string()?;
        self.expect(&TokenKind::LBrace)?;

        let mut description = None;
        if self.peek().kind == TokenKind::Description {
            self.advance();
            self.expect(&TokenKind::Colon)?;
            description = Some(self.expect_string()?);
        }

        self.expect(&TokenKind::Target)?;
        self.expect(&TokenKind::Colon)?;
        let target = Some(self.expect_string()?);

        let mut conditions = Vec::new();
        if self.peek().kind == TokenKind::Condition {
            self.advance();
            self.expect(&TokenKind::LBrace)?;
            while self.peek().kind != TokenKind::RBrace {
                conditions.push(self.parse_condition()?);
            }
            self.expect(&TokenKind::RBrace)?;
        }

        let mut actions = Vec::new();
        while self.peek().kind == TokenKind::Action {
            actions.push(self.parse_action()?);
        }

        self.expect(&TokenKind::RBrace)?;

        Ok(RuleAst {
            name,
            description,
            target,
            conditions,
            actions,
            line: start_line,
        })
    }

    fn parse_condition(&mut self) -> Result<ConditionAst, DslError> {
        let line = self.peek().line;
        let field = self.expect_identifier()?;
        self.expect(&TokenKind::Colon)?;

        let (operator, value) = match self.advance().kind {
            TokenKind::String(s) => (Operator::Equals, Value::Str(s)),
            TokenKind::Number(n) => (Operator::Equals, Value::Num(n)),
            TokenKind::Identifier(func) => {
                let operator = match func.as_str() {
                    "equals" => Operator::Equals,
                    "contains" => Operator::Contains,
                    "matches" => Operator::Matches,
                    "greaterThan" => Operator::GreaterThan,
                    "lessThan" => Operator::LessThan,
                    other => {
                        return Err(DslError::Syntax {
                            line,
                            message: format!("unknown condition operator: {other}"),
                        })
                    }
                };
                self.expect(&TokenKind::LParen)?;
                let value = match self.advance().kind {
                    TokenKind::String(s) => Value::Str(s),
                    TokenKind::Number(n) => Value::Num(n),
                    other => {
                        return Err(DslError::Syntax {
                            line,
                            message: format!("expected string or number argument, found {other:?}"),
                        })
                    }
                };
                self.expect(&TokenKind::RParen)?;
                (operator, value)
            }
            other => {
                return Err(DslError::Syntax {
                    line,
                    message: format!("invalid condition value: {other:?}"),
                })
            }
        };

        Ok(ConditionAst {
            field,
            operator,
            value,
            line,
        })
    }

    fn parse_action(&mut self) -> Result<ActionAst, DslError> {
        let line = self.peek().line;
        self.expect(&TokenKind::Action)?;
        self.expect(&TokenKind::LBrace)?;
        self.expect(&TokenKind::Type)?;
        self.expect(&TokenKind::Colon)?;
        let action_type = self.expect_identifier()?;

        let mut parameters = Vec::new();
        if self.peek().kind == TokenKind::Parameters {
            self.advance();
            self.expect(&TokenKind::Colon)?;
            self.expect(&TokenKind::LBrace)?;
            while self.peek().kind != TokenKind::RBrace {
                let key = self.expect_identifier()?;
                self.expect(&TokenKind::Colon)?;
                let value = match self.advance().kind {
                    TokenKind::String(s) => ParamValue::Str(s),
                    TokenKind::Number(n) => ParamValue::Num(n),
                    TokenKind::Identifier(ident) => match ident.as_str() {
                        "true" => ParamValue::Bool(true),
                        "false" => ParamValue::Bool(false),
                        other => ParamValue::Ident(other.to_string()),
                    },
                    other => {
                        return Err(DslError::Syntax {
                            line,
                            message: format!("invalid parameter value: {other:?}"),
                        })
                    }
                };
                parameters.push((key, value));
                if self.peek().kind == TokenKind::Comma {
                    self.advance();
                }
            }
            self.expect(&TokenKind::RBrace)?;
        }

        self.expect(&TokenKind::RBrace)?;

        Ok(ActionAst {
            action_type,
            parameters,
            line,
        })
    }
}

/// Parses a token stream produced by [`crate::lexer::lex`] into a [`RuleAst`].
pub fn parse(tokens: &[Token]) -> Result<RuleAst, DslError> {
    let mut parser = Parser::new(tokens);
    let rule = parser.parse_rule()?;
    if parser.peek().kind != TokenKind::Eof {
        return Err(DslError::Syntax {
            line: parser.peek().line,
            message: format!("unexpected trailing token: {:?}", parser.peek().kind),
        });
    }
    Ok(rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    const SOURCE: &str = r#"
        rule "AsyncFns" {
          description: "matches async functions"
          target: "function_declaration"
          condition { contentPattern: "async"
                      complexity: greaterThan(5) }
          action { type: extract
                   parameters: { includeComments: true } }
        }
    "#;

    #[test]
    fn parses_the_example_rule() {
        let tokens = lex(SOURCE).unwrap();
        let rule = parse(&tokens).unwrap();
        assert_eq!(rule.name, "AsyncFns");
        assert_eq!(rule.target.as_deref(), Some("function_declaration"));
        assert_eq!(rule.conditions.len(), 2);
        assert_eq!(rule.conditions[1].operator, Operator::GreaterThan);
        assert_eq!(rule.actions.len(), 1);
        assert_eq!(rule.actions[0].action_type, "extract");
    }

    #[test]
    fn rejects_missing_target() {
        let tokens = lex(r#"rule "X" { action { type: report } }"#).unwrap();
        assert!(parse(&tokens).is_err());
    }
}
