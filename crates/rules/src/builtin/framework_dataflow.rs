use std::sync::LazyLock;

use codeloom_core::{FrameworkTag, Language, Snippet, SnippetDetail, SnippetType};
use regex::Regex;

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

static USE_STATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\buseState\s*\(|\buseEffect\s*\(").unwrap());
static DJANGO_ORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.objects\.(filter|get|all|create)\s*\(|request\.(GET|POST)\b").unwrap());
static SPRING_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(RestController|RequestMapping|GetMapping|PostMapping|Autowired)\b").unwrap());
static EXPRESS_ROUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(app|router)\.(get|post|put|delete|use)\s*\(").unwrap());
static RAW_SQL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b(select|insert|update|delete)\b.*\bfrom\b|execute\s*\(").unwrap());
static UNVALIDATED_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"req\.(body|params|query)\b|request\.(GET|POST)\b").unwrap());

fn detect(content: &str) -> Option<FrameworkTag> {
    if USE_STATE.is_match(content) {
        Some(FrameworkTag::React)
    } else if SPRING_ANNOTATION.is_match(content) {
        Some(FrameworkTag::SpringBoot)
    } else if EXPRESS_ROUTE.is_match(content) {
        Some(FrameworkTag::Express)
    } else if DJANGO_ORM.is_match(content) {
        Some(FrameworkTag::Django)
    } else {
        None
    }
}

/// Framework-specific data-flow entry points (React hooks, Django views/ORM calls,
/// Spring Boot controller annotations, Express routes) with informational security
/// and optimization notes. These notes are advisory text, not enforced lints.
pub struct FrameworkDataFlowRule;

impl Rule for FrameworkDataFlowRule {
    fn name(&self) -> &'static str {
        "framework_dataflow"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::FrameworkDataflow
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript => &["call_expression"],
            Language::Python => &["call"],
            Language::Java => &["class_declaration", "method_declaration"],
            Language::Go | Language::Rust | Language::Cpp | Language::C | Language::Markdown => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        detect(ctx.content()).is_some()
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> Snippet {
        let content = ctx.content();
        let framework = detect(content).unwrap_or(FrameworkTag::Express);

        let mut security_notes = Vec::new();
        if UNVALIDATED_INPUT.is_match(content) {
            security_notes.push("reads request input directly; verify validation happens before use".to_string());
        }
        if RAW_SQL.is_match(content) {
            security_notes.push("builds a query string; check for parameterization".to_string());
        }

        let mut optimization_notes = Vec::new();
        if content.matches("useState").count() > 2 {
            optimization_notes.push("multiple useState calls; consider useReducer".to_string());
        }
        if content.contains(".objects.all()") {
            optimization_notes.push("unbounded queryset; consider pagination".to_string());
        }

        let detail = SnippetDetail::FrameworkDataflow {
            framework,
            security_notes,
            optimization_notes,
        };
        build_snippet(ctx, self.snippet_type(), detail, true, None)
    }
}
