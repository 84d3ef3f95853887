use crate::{
    config::Config,
    error::{Error, ParseError, Result},
    syntax::{evaluate_with, ListNode, MemberNode, ObjectNode, SyntaxNode},
    token::{Token, TokenKind},
    value::Value,
};
use tracing::{debug, trace};

/// Parses tokens and evaluates the tree with the default limits.
pub fn parse(tokens: &[Token]) -> Result<Value> {
    parse_with(tokens, &Config::default())
}

pub fn parse_with(tokens: &[Token], config: &Config) -> Result<Value> {
    let tree = parse_tree(tokens, config)?;
    evaluate_with(&tree, config)
}

/// Builds the syntax tree of a single root object without evaluating it.
pub fn parse_tree(tokens: &[Token], config: &Config) -> Result<SyntaxNode> {
    Parser::new(tokens, config)
        .parse(&mut 0)
        .map_err(|err| {
            debug!(%err, "parse failed");
            err
        })
}

struct Parser<'a> {
    tokens: &'a [Token],
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], config: &Config) -> Self {
        Parser {
            tokens,
            max_depth: config.max_depth,
        }
    }

    fn move_next(idx: &mut usize) {
        *idx += 1;
    }

    fn get_cur(&self, idx: &usize) -> Option<&'a Token> {
        self.tokens.get(*idx)
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(Error::StackDepthExceeded {
                limit: self.max_depth,
            });
        }
        Ok(depth)
    }

    pub fn parse(&self, idx: &mut usize) -> Result<SyntaxNode> {
        let token = self.get_cur(idx).ok_or(ParseError::EmptyDocument)?;
        if token.kind != TokenKind::ObjectStart {
            return Err(ParseError::ExpectedObject {
                index: *idx,
                found: token.kind,
            }
            .into());
        }

        let root = self.parse_object(idx, 0)?;
        if *idx < self.tokens.len() {
            return Err(ParseError::TrailingTokens { index: *idx }.into());
        }

        debug!(tokens = self.tokens.len(), "parsed document");
        Ok(root)
    }

    // Commas are separators only, so doubled or trailing ones are skipped.
    fn parse_object(&self, idx: &mut usize, depth: usize) -> Result<SyntaxNode> {
        let depth = self.enter(depth)?;
        trace!(index = *idx, depth, "parse object");
        Parser::move_next(idx);

        let mut children: Vec<SyntaxNode> = vec![];
        loop {
            let token = self.get_cur(idx).ok_or(ParseError::UnterminatedObject)?;
            match token.kind {
                TokenKind::ObjectEnd => {
                    Parser::move_next(idx);
                    break;
                }
                TokenKind::Comma => Parser::move_next(idx),
                TokenKind::ObjectStart => children.push(self.parse_object(idx, depth)?),
                TokenKind::ListStart => children.push(self.parse_list(idx, depth)?),
                TokenKind::ListEnd | TokenKind::Colon => {
                    return Err(ParseError::UnexpectedToken {
                        index: *idx,
                        found: token.kind,
                    }
                    .into())
                }
                TokenKind::String | TokenKind::Number | TokenKind::Bool | TokenKind::Null => {
                    children.push(self.parse_member(idx, depth)?)
                }
            }
        }

        Ok(SyntaxNode::Object(ObjectNode { children }))
    }

    fn parse_list(&self, idx: &mut usize, depth: usize) -> Result<SyntaxNode> {
        let depth = self.enter(depth)?;
        trace!(index = *idx, depth, "parse list");
        Parser::move_next(idx);

        let mut elements: Vec<SyntaxNode> = vec![];
        loop {
            let token = self.get_cur(idx).ok_or(ParseError::UnterminatedList)?;
            match token.kind {
                TokenKind::ListEnd => {
                    Parser::move_next(idx);
                    break;
                }
                TokenKind::Comma => Parser::move_next(idx),
                TokenKind::ObjectStart => elements.push(self.parse_object(idx, depth)?),
                TokenKind::ListStart => elements.push(self.parse_list(idx, depth)?),
                TokenKind::ObjectEnd | TokenKind::Colon => {
                    return Err(ParseError::UnexpectedToken {
                        index: *idx,
                        found: token.kind,
                    }
                    .into())
                }
                TokenKind::String | TokenKind::Number | TokenKind::Bool | TokenKind::Null => {
                    Parser::move_next(idx);
                    elements.push(SyntaxNode::Token(token.clone()));
                }
            }
        }

        Ok(SyntaxNode::List(ListNode { elements }))
    }

    fn parse_member(&self, idx: &mut usize, depth: usize) -> Result<SyntaxNode> {
        let key_index = *idx;
        let key = self.get_cur(idx).ok_or(ParseError::UnterminatedObject)?;
        Parser::move_next(idx);

        let colon = self.get_cur(idx).ok_or(ParseError::UnterminatedObject)?;
        if colon.kind != TokenKind::Colon {
            return Err(ParseError::ExpectedColon {
                index: *idx,
                found: colon.kind,
            }
            .into());
        }
        Parser::move_next(idx);

        if key.kind != TokenKind::String {
            return Err(ParseError::KeyNotString {
                index: key_index,
                found: key.kind,
            }
            .into());
        }

        let value = self.parse_value(idx, depth)?;
        Ok(SyntaxNode::Member(MemberNode::new(key.clone(), value)))
    }

    fn parse_value(&self, idx: &mut usize, depth: usize) -> Result<SyntaxNode> {
        let token = self.get_cur(idx).ok_or(ParseError::UnterminatedObject)?;
        match token.kind {
            TokenKind::ObjectStart => self.parse_object(idx, depth),
            TokenKind::ListStart => self.parse_list(idx, depth),
            TokenKind::String | TokenKind::Number | TokenKind::Bool | TokenKind::Null => {
                Parser::move_next(idx);
                Ok(SyntaxNode::Token(token.clone()))
            }
            TokenKind::ObjectEnd | TokenKind::ListEnd | TokenKind::Colon | TokenKind::Comma => {
                Err(ParseError::ExpectedValue {
                    index: *idx,
                    found: token.kind,
                }
                .into())
            }
        }
    }
}
