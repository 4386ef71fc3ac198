//! Snippets: the extraction core's main output unit.

use serde::{Deserialize, Serialize};

use crate::chunk::ChunkMetadata;
use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnippetType {
    ControlStructure,
    ErrorHandling,
    FunctionCallChain,
    ExpressionSequence,
    CommentMarked,
    LogicBlock,
    ObjectArrayLiteral,
    ArithmeticLogicalExpression,
    TemplateLiteral,
    DestructuringAssignment,
    Comprehension,
    Stream,
    Goroutine,
    Interface,
    AsyncPattern,
    DecoratorPattern,
    GenericPattern,
    FunctionalProgramming,
    FrameworkDataflow,
}

impl SnippetType {
    pub fn as_str(self) -> &'static str {
        match self {
            SnippetType::ControlStructure => "control_structure",
            SnippetType::ErrorHandling => "error_handling",
            SnippetType::FunctionCallChain => "function_call_chain",
            SnippetType::ExpressionSequence => "expression_sequence",
            SnippetType::CommentMarked => "comment_marked",
            SnippetType::LogicBlock => "logic_block",
            SnippetType::ObjectArrayLiteral => "object_array_literal",
            SnippetType::ArithmeticLogicalExpression => "arithmetic_logical_expression",
            SnippetType::TemplateLiteral => "template_literal",
            SnippetType::DestructuringAssignment => "destructuring_assignment",
            SnippetType::Comprehension => "comprehension",
            SnippetType::Stream => "stream",
            SnippetType::Goroutine => "goroutine",
            SnippetType::Interface => "interface",
            SnippetType::AsyncPattern => "async_pattern",
            SnippetType::DecoratorPattern => "decorator_pattern",
            SnippetType::GenericPattern => "generic_pattern",
            SnippetType::FunctionalProgramming => "functional_programming",
            SnippetType::FrameworkDataflow => "framework_dataflow",
        }
    }
}

/// `context_info`: where in the tree this snippet sits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextInfo {
    pub nesting_level: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_class: Option<String>,
}

/// `language_features`: booleans derived from the snippet text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageFeatures {
    pub uses_async: bool,
    pub uses_generators: bool,
    pub uses_destructuring: bool,
    pub uses_spread: bool,
    pub uses_template_literals: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallType {
    Simple,
    Chained,
    Async,
    CallbackBased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComprehensionKind {
    List,
    Dict,
    Set,
    Generator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalStyle {
    Declarative,
    Imperative,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purity {
    Pure,
    Impure,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameworkTag {
    React,
    Django,
    SpringBoot,
    Express,
}

impl FrameworkTag {
    pub fn as_str(self) -> &'static str {
        match self {
            FrameworkTag::React => "react",
            FrameworkTag::Django => "django",
            FrameworkTag::SpringBoot => "spring_boot",
            FrameworkTag::Express => "express",
        }
    }
}

/// Rule-specific sub-metadata, modeled as a sum type keyed by [`SnippetType`] rather than a
/// free-form map: each variant carries exactly the fields its rule produces, and
/// `#[serde(deny_unknown_fields)]` on the DSL-facing deserialization path (see
/// `codeloom-dsl`) means stray fields never round-trip silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SnippetDetail {
    None,
    CallChain {
        chain_length: u32,
        has_async: bool,
        has_callbacks: bool,
        call_type: CallType,
    },
    Comprehension {
        comp_type: ComprehensionKind,
        conditions: u32,
        loops: u32,
    },
    Stream {
        collectors: Vec<String>,
        chain_depth: u32,
    },
    Goroutine {
        goroutines: u32,
        channels: Vec<String>,
        uses_select: bool,
        uses_waitgroup: bool,
        uses_mutex: bool,
        purpose: String,
    },
    Interface {
        interfaces: Vec<String>,
        embedded: Vec<String>,
        method_signatures: Vec<String>,
        purpose: String,
    },
    Functional {
        style: FunctionalStyle,
        purity: Purity,
        chaining_depth: u32,
    },
    FrameworkDataflow {
        framework: FrameworkTag,
        security_notes: Vec<String>,
        optimization_notes: Vec<String>,
    },
}

/// `snippet_metadata`: everything unique to a snippet as opposed to a structural chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetMetadata {
    pub snippet_type: SnippetType,
    pub context_info: ContextInfo,
    pub language_features: LanguageFeatures,
    pub complexity: u32,
    pub is_standalone: bool,
    pub has_side_effects: bool,
    pub detail: SnippetDetail,
}

/// A semantically meaningful sub-tree identified by a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub content: String,
    pub start_line: usize,
    pub end_line: usize,
    pub start_byte: usize,
    pub end_byte: usize,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub chunk_metadata: ChunkMetadata,
    pub snippet_metadata: SnippetMetadata,
}

impl Snippet {
    /// `(I5)`: a snippet's content must match its type's shape predicate. Used both as a
    /// self-check in `create_snippet` and by the validator.
    pub fn matches_shape(&self) -> bool {
        crate::heuristics::matches_shape(self.snippet_metadata.snippet_type, &self.content)
    }
}
