//! Syntax tree built by the parser and its evaluation into [`Value`]s.

use crate::{
    config::Config,
    error::{Error, EvalError, Result},
    token::{Token, TokenKind},
    value::{Map, Value},
};
use tracing::trace;

#[derive(Clone, Debug, PartialEq)]
pub enum SyntaxNode {
    Object(ObjectNode),
    List(ListNode),
    Member(MemberNode),
    Token(Token),
}

/// Children are expected to be members; anything else fails evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectNode {
    pub children: Vec<SyntaxNode>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListNode {
    pub elements: Vec<SyntaxNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemberNode {
    pub key: Token,
    pub value: Box<SyntaxNode>,
}

impl MemberNode {
    pub fn new(key: Token, value: SyntaxNode) -> Self {
        MemberNode {
            key,
            value: Box::new(value),
        }
    }
}

/// Evaluates a syntax tree with the default limits.
pub fn evaluate(node: &SyntaxNode) -> Result<Value> {
    evaluate_with(node, &Config::default())
}

/// Evaluates a syntax tree, failing once nesting passes `config.max_depth`.
pub fn evaluate_with(node: &SyntaxNode, config: &Config) -> Result<Value> {
    Evaluator {
        max_depth: config.max_depth,
    }
    .evaluate(node, 0)
}

struct Evaluator {
    max_depth: usize,
}

impl Evaluator {
    fn enter(&self, depth: usize) -> Result<usize> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(Error::StackDepthExceeded {
                limit: self.max_depth,
            });
        }
        Ok(depth)
    }

    fn evaluate(&self, node: &SyntaxNode, depth: usize) -> Result<Value> {
        match node {
            SyntaxNode::Token(token) => Ok(evaluate_token(token)?),
            SyntaxNode::Object(object) => self.evaluate_object(object, self.enter(depth)?),
            SyntaxNode::List(list) => self.evaluate_list(list, self.enter(depth)?),
            SyntaxNode::Member(_) => Err(EvalError::MisplacedMember.into()),
        }
    }

    fn evaluate_object(&self, object: &ObjectNode, depth: usize) -> Result<Value> {
        trace!(depth, members = object.children.len(), "evaluate object");

        let mut m = Map::new();
        for child in &object.children {
            let member = match child {
                SyntaxNode::Member(member) => member,
                _ => return Err(EvalError::NotAMember.into()),
            };
            let key = evaluate_key(&member.key)?;
            let value = self.evaluate(&member.value, depth)?;
            m.insert(key, value);
        }
        Ok(Value::Map(m))
    }

    fn evaluate_list(&self, list: &ListNode, depth: usize) -> Result<Value> {
        trace!(depth, elements = list.elements.len(), "evaluate list");

        let mut v = Vec::with_capacity(list.elements.len());
        for element in &list.elements {
            v.push(self.evaluate(element, depth)?);
        }
        Ok(Value::List(v))
    }
}

fn evaluate_key(token: &Token) -> std::result::Result<String, EvalError> {
    match token.kind {
        TokenKind::String => Ok(token.literal.clone()),
        _ => Err(EvalError::KeyNotString(token.literal.clone())),
    }
}

fn evaluate_token(token: &Token) -> std::result::Result<Value, EvalError> {
    Ok(match token.kind {
        TokenKind::String => Value::String(token.literal.clone()),
        TokenKind::Bool => Value::Bool(token.literal == "true"),
        TokenKind::Null => Value::Null,
        TokenKind::Number => evaluate_number(&token.literal)?,
        kind => return Err(EvalError::NonValueToken(kind)),
    })
}

// A literal with a decimal point is a float, otherwise an integer. Integers
// outside the i64 range fall back to the nearest float.
fn evaluate_number(literal: &str) -> std::result::Result<Value, EvalError> {
    let parsed = if literal.contains('.') {
        literal.parse::<f64>().ok().map(Value::Float)
    } else {
        literal
            .parse::<i64>()
            .map(Value::Integer)
            .or_else(|_| literal.parse::<f64>().map(Value::Float))
            .ok()
    };
    parsed.ok_or_else(|| EvalError::InvalidNumber(literal.to_string()))
}
