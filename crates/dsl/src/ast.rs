//! Parsed (but not yet semantically validated) form of a DSL rule.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operator {
    Equals,
    Contains,
    Matches,
    GreaterThan,
    LessThan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Str(String),
    Num(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionAst {
    pub field: String,
    pub operator: Operator,
    pub value: Value,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Str(String),
    Num(f64),
    Bool(bool),
    Ident(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionAst {
    pub action_type: String,
    pub parameters: Vec<(String, ParamValue)>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleAst {
    pub name: String,
    pub description: Option<String>,
    pub target: Option<String>,
    pub conditions: Vec<ConditionAst>,
    pub actions: Vec<ActionAst>,
    pub line: usize,
}
