//! The ~19 built-in rules, and the pre-declared subsets used by [`crate::registry::SelectionPolicy`].

mod arithmetic_logical;
mod async_pattern;
mod call_chain;
mod comment_marked;
mod control_structure;
mod decorator_pattern;
mod destructuring;
mod error_handling;
mod expression_sequence;
mod framework_dataflow;
mod functional;
mod generic_pattern;
mod go_goroutine;
mod go_interface;
mod java_lambda;
mod java_stream;
mod logic_block;
mod object_array_literal;
mod python_comprehension;
mod template_literal;

pub use arithmetic_logical::ArithmeticLogicalRule;
pub use async_pattern::AsyncPatternRule;
pub use call_chain::FunctionCallChainRule;
pub use comment_marked::CommentMarkedRule;
pub use control_structure::ControlStructureRule;
pub use decorator_pattern::DecoratorPatternRule;
pub use destructuring::DestructuringAssignmentRule;
pub use error_handling::ErrorHandlingRule;
pub use expression_sequence::ExpressionSequenceRule;
pub use framework_dataflow::FrameworkDataFlowRule;
pub use functional::FunctionalProgrammingRule;
pub use generic_pattern::GenericPatternRule;
pub use go_goroutine::GoGoroutineRule;
pub use go_interface::GoInterfaceRule;
pub use java_lambda::JavaLambdaRule;
pub use java_stream::JavaStreamRule;
pub use logic_block::LogicBlockRule;
pub use object_array_literal::ObjectArrayLiteralRule;
pub use python_comprehension::PythonComprehensionRule;
pub use template_literal::TemplateLiteralRule;

use crate::registry::FocusArea;
use crate::rule::Rule;
use codeloom_core::FrameworkTag;

/// Every built-in rule, in the fixed order the Rule Engine emits in (within one node,
/// when several rules match the same node kind).
#[must_use]
pub fn all_builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ControlStructureRule),
        Box::new(ErrorHandlingRule),
        Box::new(FunctionCallChainRule),
        Box::new(DestructuringAssignmentRule),
        Box::new(TemplateLiteralRule),
        Box::new(ObjectArrayLiteralRule),
        Box::new(ArithmeticLogicalRule),
        Box::new(LogicBlockRule),
        Box::new(ExpressionSequenceRule),
        Box::new(CommentMarkedRule),
        Box::new(AsyncPatternRule),
        Box::new(DecoratorPatternRule),
        Box::new(GenericPatternRule),
        Box::new(FunctionalProgrammingRule),
        Box::new(PythonComprehensionRule),
        Box::new(JavaStreamRule),
        Box::new(JavaLambdaRule),
        Box::new(GoGoroutineRule),
        Box::new(GoInterfaceRule),
        Box::new(FrameworkDataFlowRule),
    ]
}

const PERFORMANCE_RULES: &[&str] = &[
    "function_call_chain",
    "java_stream",
    "functional_programming",
    "object_array_literal",
];
const ARCHITECTURE_RULES: &[&str] = &["go_interface", "generic_pattern", "decorator_pattern"];
const PATTERNS_RULES: &[&str] = &[
    "python_comprehension",
    "template_literal",
    "destructuring_assignment",
    "comment_marked",
];
const CONCURRENCY_RULES: &[&str] = &["go_goroutine", "async_pattern"];

/// The rule names belonging to one [`FocusArea`], used by `SelectionPolicy::Focused`.
#[must_use]
pub fn focus_area_rules(area: FocusArea) -> &'static [&'static str] {
    match area {
        FocusArea::Performance => PERFORMANCE_RULES,
        FocusArea::Architecture => ARCHITECTURE_RULES,
        FocusArea::Patterns => PATTERNS_RULES,
        FocusArea::Concurrency => CONCURRENCY_RULES,
    }
}

const REACT_RULES: &[&str] = &["framework_dataflow", "async_pattern", "functional_programming"];
const DJANGO_RULES: &[&str] = &["framework_dataflow", "python_comprehension"];
const SPRING_BOOT_RULES: &[&str] = &["framework_dataflow", "java_stream", "java_lambda", "decorator_pattern"];
const EXPRESS_RULES: &[&str] = &["framework_dataflow", "async_pattern", "function_call_chain"];

/// The rule names tagged for one [`FrameworkTag`], used by `SelectionPolicy::FrameworkSpecific`.
#[must_use]
pub fn framework_rules(tag: FrameworkTag) -> &'static [&'static str] {
    match tag {
        FrameworkTag::React => REACT_RULES,
        FrameworkTag::Django => DJANGO_RULES,
        FrameworkTag::SpringBoot => SPRING_BOOT_RULES,
        FrameworkTag::Express => EXPRESS_RULES,
    }
}
