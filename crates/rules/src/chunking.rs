//! Structural chunk extraction: functions, classes, imports, exports, and one
//! whole-file module chunk. Runs over the same [`Ast`] as the Rule Engine's snippet
//! pass, but independently of it — a chunk is a coarser, type-taxonomy-free record
//! that the snippet stream sits on top of, not something any `Rule` produces.

use std::sync::LazyLock;

use codeloom_core::heuristics::{base_complexity, non_blank_line_count};
use codeloom_core::{Ast, Chunk, ChunkKind, ChunkMetadata, Language, NodeId};
use codeloom_utils::short_hash_hex;
use regex::Regex;

use crate::context::{class_kinds, function_kinds};

fn import_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::JavaScript | Language::TypeScript => &["import_statement"],
        Language::Python => &["import_statement", "import_from_statement"],
        Language::Go => &["import_declaration"],
        Language::Java => &["import_declaration"],
        Language::Rust => &["use_declaration"],
        Language::Cpp | Language::C => &["preproc_include"],
        Language::Markdown => &[],
    }
}

fn export_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::JavaScript | Language::TypeScript => &["export_statement"],
        _ => &[],
    }
}

static PARAM_LIST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^()]*)\)").unwrap());
static ARROW_RETURN_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)\s*(?:->|:)\s*([\w<>\[\]:, ]+?)\s*\{").unwrap());
static INHERITANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:extends|implements)\s+([\w, ]+?)(?:\{|$)").unwrap());
static PY_BASE_CLASSES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"class\s+\w+\s*\(([^)]+)\)").unwrap());
static FIELD_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:public|private|protected|static|final)*\s*[\w<>\[\]]+\s+(\w+)\s*[;=]").unwrap());
static QUOTED_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"["']([^"']+)["']"#).unwrap());
static BARE_IMPORT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:import|use)\s+([\w:./*{}, ]+?)\s*;?\s*$").unwrap());

fn id_for(kind: ChunkKind, start_line: usize, content: &str) -> String {
    format!("{}_{}_{}", kind.as_str(), start_line, short_hash_hex(content.as_bytes()))
}

fn split_params(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.split(|c: char| c == ':' || c.is_whitespace()).next().unwrap_or(s).to_string())
        .collect()
}

fn names_of_kind_within(ast: &Ast, node: NodeId, kinds: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = ast.get(node).children.clone();
    while let Some(id) = stack.pop() {
        let child = ast.get(id);
        if kinds.contains(&child.kind.as_str()) {
            if let Some(name) = &child.name {
                out.push(name.clone());
            }
        }
        stack.extend(child.children.iter().copied());
    }
    out
}

fn import_path(content: &str) -> String {
    QUOTED_PATH
        .captures(content)
        .or_else(|| BARE_IMPORT_PATH.captures(content))
        .and_then(|c| c.get(1))
        .map_or_else(|| content.trim().to_string(), |m| m.as_str().trim().to_string())
}

fn function_metadata(content: &str, language: Language) -> ChunkMetadata {
    ChunkMetadata {
        language: Some(language),
        complexity: base_complexity(content),
        parameters: PARAM_LIST.captures(content).map(|c| split_params(&c[1])),
        return_type: ARROW_RETURN_TYPE.captures(content).map(|c| c[1].trim().to_string()),
        lines_of_code: non_blank_line_count(content),
        ..ChunkMetadata::default()
    }
}

fn class_metadata(ast: &Ast, node: NodeId, content: &str, language: Language) -> ChunkMetadata {
    let methods = names_of_kind_within(ast, node, function_kinds(language));
    let properties: Vec<String> = FIELD_DECL.captures_iter(content).map(|c| c[1].to_string()).collect();
    let inheritance = INHERITANCE
        .captures(content)
        .or_else(|| PY_BASE_CLASSES.captures(content))
        .map(|c| c[1].split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect::<Vec<_>>());

    ChunkMetadata {
        language: Some(language),
        complexity: base_complexity(content),
        methods: (!methods.is_empty()).then_some(methods),
        properties: (!properties.is_empty()).then_some(properties),
        inheritance,
        lines_of_code: non_blank_line_count(content),
        ..ChunkMetadata::default()
    }
}

fn chunk_from(ast: &Ast, node: NodeId, source: &str, language: Language, kind: ChunkKind) -> Chunk {
    let ast_node = ast.get(node);
    let content = ast.content_of(node, source).to_string();
    let metadata = match kind {
        ChunkKind::Function => function_metadata(&content, language),
        ChunkKind::Class => class_metadata(ast, node, &content, language),
        ChunkKind::Import => ChunkMetadata {
            language: Some(language),
            complexity: base_complexity(&content),
            lines_of_code: non_blank_line_count(&content),
            imports: vec![import_path(&content)],
            ..ChunkMetadata::default()
        },
        ChunkKind::Export => ChunkMetadata {
            language: Some(language),
            complexity: base_complexity(&content),
            lines_of_code: non_blank_line_count(&content),
            exports: vec![import_path(&content)],
            ..ChunkMetadata::default()
        },
        ChunkKind::Module => unreachable!("module chunks are built directly by extract_chunks"),
    };

    Chunk {
        id: id_for(kind, ast_node.start_pos.row + 1, &content),
        start_line: ast_node.start_pos.row + 1,
        end_line: ast_node.end_pos.row + 1,
        start_byte: ast_node.start_byte,
        end_byte: ast_node.end_byte,
        kind,
        name: ast_node.name.clone(),
        metadata,
        content,
    }
}

/// Extracts every structural chunk (functions, classes, imports, exports) plus one
/// whole-file module chunk summarizing them, from `ast`.
#[must_use]
pub fn extract_chunks(ast: &Ast, source: &str, language: Language) -> Vec<Chunk> {
    let Some(root) = ast.root() else { return Vec::new() };
    let mut chunks = Vec::new();

    for &node in &ast.find_nodes_by_kinds(function_kinds(language)) {
        chunks.push(chunk_from(ast, node, source, language, ChunkKind::Function));
    }
    for &node in &ast.find_nodes_by_kinds(class_kinds(language)) {
        chunks.push(chunk_from(ast, node, source, language, ChunkKind::Class));
    }
    for &node in &ast.find_nodes_by_kinds(import_kinds(language)) {
        chunks.push(chunk_from(ast, node, source, language, ChunkKind::Import));
    }
    for &node in &ast.find_nodes_by_kinds(export_kinds(language)) {
        chunks.push(chunk_from(ast, node, source, language, ChunkKind::Export));
    }

    let imports: Vec<String> = chunks
        .iter()
        .filter(|c| c.kind == ChunkKind::Import)
        .flat_map(|c| c.metadata.imports.clone())
        .collect();
    let exports: Vec<String> = chunks
        .iter()
        .filter(|c| c.kind == ChunkKind::Export)
        .flat_map(|c| c.metadata.exports.clone())
        .collect();

    let root_node = ast.get(root);
    chunks.push(Chunk {
        id: id_for(ChunkKind::Module, root_node.start_pos.row + 1, source),
        content: source.to_string(),
        start_line: root_node.start_pos.row + 1,
        end_line: root_node.end_pos.row + 1,
        start_byte: root_node.start_byte,
        end_byte: root_node.end_byte,
        kind: ChunkKind::Module,
        name: None,
        metadata: ChunkMetadata {
            language: Some(language),
            complexity: base_complexity(source),
            lines_of_code: non_blank_line_count(source),
            imports,
            exports,
            ..ChunkMetadata::default()
        },
    });

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeloom_parser::{build_ast, ts_language};
    use tree_sitter::Parser;

    fn parse(source: &str, language: Language) -> Ast {
        let mut parser = Parser::new();
        parser.set_language(&ts_language(language)).unwrap();
        let tree = parser.parse(source, None).unwrap();
        build_ast(&tree, source.as_bytes())
    }

    #[test]
    fn extracts_function_class_and_import_chunks() {
        let source = "import { readFile } from 'fs';\n\nclass Widget extends Base {\n  render() {\n    return 1;\n  }\n}\n\nfunction run(a, b) {\n  return a + b;\n}\n";
        let ast = parse(source, Language::JavaScript);
        let chunks = extract_chunks(&ast, source, Language::JavaScript);

        assert!(chunks.iter().any(|c| c.kind == ChunkKind::Import && c.metadata.imports == vec!["fs".to_string()]));
        let class_chunk = chunks.iter().find(|c| c.kind == ChunkKind::Class).expect("class chunk");
        assert_eq!(class_chunk.name.as_deref(), Some("Widget"));
        assert_eq!(class_chunk.metadata.inheritance.as_deref(), Some(&["Base".to_string()][..]));
        assert!(class_chunk.metadata.methods.as_deref().unwrap_or(&[]).contains(&"render".to_string()));

        let fn_chunk = chunks
            .iter()
            .find(|c| c.kind == ChunkKind::Function && c.name.as_deref() == Some("run"))
            .expect("function chunk for `run`");
        assert_eq!(fn_chunk.metadata.parameters.as_deref(), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn emits_exactly_one_module_chunk_per_file() {
        let source = "function run() {\n  return 1;\n}\n";
        let ast = parse(source, Language::JavaScript);
        let chunks = extract_chunks(&ast, source, Language::JavaScript);
        assert_eq!(chunks.iter().filter(|c| c.kind == ChunkKind::Module).count(), 1);
        let module = chunks.iter().find(|c| c.kind == ChunkKind::Module).unwrap();
        assert_eq!(module.content, source);
    }
}
