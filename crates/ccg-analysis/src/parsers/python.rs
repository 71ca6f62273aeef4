//! Python parser using native tree-sitter.
//!
//! Lowers the concrete syntax tree into `SyntaxNode`s: functions, classes,
//! calls, and imports at every nesting depth.

use std::path::Path;

use ccg_core::errors::ParseError;
use tree_sitter::{Node, Parser};

use super::docstring;
use super::error_tolerant::{count_errors, first_error};
use super::types::*;

/// Python parser. Holds one tree-sitter parser and reuses it across files.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    /// Create a new Python parser
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| ParseError::Grammar {
                message: e.to_string(),
            })?;
        Ok(Self { parser })
    }

    /// Read and parse one file. The file handle is released before returning.
    pub fn parse_file(&mut self, path: &Path) -> Result<ParsedFile, ParseError> {
        let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8(bytes).map_err(|_| ParseError::Encoding {
            path: path.to_path_buf(),
        })?;
        self.parse_source(path, &source)
    }

    /// Parse source text attributed to `path`.
    ///
    /// Any ERROR or MISSING node rejects the whole file.
    pub fn parse_source(&mut self, path: &Path, source: &str) -> Result<ParsedFile, ParseError> {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);

        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::TreeSitter {
                path: path.to_path_buf(),
            })?;
        let root = tree.root_node();

        if let Some((row, column)) = first_error(root) {
            tracing::debug!(
                path = %path.display(),
                errors = count_errors(root),
                "syntax tree contains errors"
            );
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                line: row as u32 + 1,
                column: column as u32 + 1,
            });
        }

        let mut extractor = Extractor {
            source: source.as_bytes(),
            nodes: Vec::new(),
            open_functions: Vec::new(),
            claimed_definitions: Vec::new(),
        };
        extractor.walk(root).map_err(|node| {
            let pos = node.start_position();
            ParseError::Syntax {
                path: path.to_path_buf(),
                line: pos.row as u32 + 1,
                column: pos.column as u32 + 1,
            }
        })?;

        Ok(ParsedFile {
            path: path.to_path_buf(),
            nodes: extractor.nodes,
        })
    }
}

/// Pre-order walk state.
struct Extractor<'s> {
    source: &'s [u8],
    nodes: Vec<SyntaxNode>,
    /// Indices into `nodes` of the functions enclosing the current node.
    open_functions: Vec<usize>,
    /// Ids of `function_definition` nodes already recorded by their
    /// `decorated_definition`.
    claimed_definitions: Vec<usize>,
}

impl Extractor<'_> {
    /// Cursor-driven pre-order walk; nesting depth costs no call stack.
    ///
    /// Fails with the first Python 2 only statement, which tree-sitter
    /// accepts but Python 3 does not.
    fn walk<'t>(&mut self, root: Node<'t>) -> Result<(), Node<'t>> {
        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            if self.enter(node)? && cursor.goto_first_child() {
                continue;
            }
            loop {
                self.leave(cursor.node());
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return Ok(());
                }
            }
        }
    }

    /// Records `node`; returns whether its children should be visited.
    fn enter<'t>(&mut self, node: Node<'t>) -> Result<bool, Node<'t>> {
        match node.kind() {
            "decorated_definition" => {
                if let Some(def) = decorated_function(node) {
                    // Decorator calls belong to the function they decorate.
                    self.claimed_definitions.push(def.id());
                    self.open_function(def);
                }
            }
            "function_definition" => {
                if self.claimed_definitions.last() != Some(&node.id()) {
                    self.open_function(node);
                }
            }
            "class_definition" => {
                let decl = self.class_decl(node);
                self.nodes.push(SyntaxNode::Class(decl));
            }
            "call" => {
                let call = self.call_expr(node);
                for &idx in &self.open_functions {
                    if let SyntaxNode::Function(f) = &mut self.nodes[idx] {
                        f.calls.push(call.clone());
                    }
                }
                self.nodes.push(SyntaxNode::Call(call));
            }
            "import_statement" => {
                let decl = self.import_decl(node);
                self.nodes.push(SyntaxNode::Import(decl));
                return Ok(false);
            }
            "import_from_statement" | "future_import_statement" => {
                let decl = self.import_from_decl(node);
                self.nodes.push(SyntaxNode::ImportFrom(decl));
                return Ok(false);
            }
            "print_statement" | "exec_statement" => return Err(node),
            _ => {}
        }
        Ok(true)
    }

    fn leave(&mut self, node: Node) {
        match node.kind() {
            "decorated_definition" => {
                if decorated_function(node).is_some() {
                    self.open_functions.pop();
                }
            }
            "function_definition" => {
                if self.claimed_definitions.last() == Some(&node.id()) {
                    self.claimed_definitions.pop();
                } else {
                    self.open_functions.pop();
                }
            }
            _ => {}
        }
    }

    fn open_function(&mut self, def: Node) {
        let decl = self.function_decl(def);
        self.open_functions.push(self.nodes.len());
        self.nodes.push(SyntaxNode::Function(decl));
    }

    fn text(&self, node: Node) -> String {
        node.utf8_text(self.source).unwrap_or("").to_string()
    }

    fn field_text(&self, node: Node, field: &str) -> String {
        node.child_by_field_name(field)
            .map(|n| self.text(n))
            .unwrap_or_default()
    }

    fn function_decl(&self, node: Node) -> FunctionDecl {
        let mut cursor = node.walk();
        let is_async = node.children(&mut cursor).any(|c| c.kind() == "async");

        FunctionDecl {
            name: self.field_text(node, "name"),
            line: line_of(node),
            params: node
                .child_by_field_name("parameters")
                .map(|p| self.param_names(p))
                .unwrap_or_default(),
            docstring: node
                .child_by_field_name("body")
                .and_then(|body| self.docstring(body)),
            is_async,
            calls: Vec::new(),
        }
    }

    /// Positional parameters in order, stopping at `*` or `*args`.
    fn param_names(&self, params: Node) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = params.walk();
        for param in params.named_children(&mut cursor) {
            match param.kind() {
                "identifier" => names.push(self.text(param)),
                "default_parameter" | "typed_default_parameter" => {
                    if let Some(name) = param.child_by_field_name("name") {
                        if name.kind() == "identifier" {
                            names.push(self.text(name));
                        }
                    }
                }
                "typed_parameter" => {
                    let mut inner = param.walk();
                    let first = param.named_children(&mut inner).next();
                    match first.map(|n| (n.kind(), n)) {
                        Some(("identifier", n)) => names.push(self.text(n)),
                        Some(("list_splat_pattern", _)) => break,
                        _ => {}
                    }
                }
                // Positional-only names are not reported.
                "positional_separator" => names.clear(),
                "list_splat_pattern" | "keyword_separator" => break,
                _ => {}
            }
        }
        names
    }

    fn class_decl(&self, node: Node) -> ClassDecl {
        let bases = node
            .child_by_field_name("superclasses")
            .map(|args| {
                let mut cursor = args.walk();
                args.named_children(&mut cursor)
                    .filter(|arg| !matches!(arg.kind(), "keyword_argument" | "comment"))
                    .map(|arg| self.dotted_or_text(arg))
                    .collect()
            })
            .unwrap_or_default();

        let body = node.child_by_field_name("body");
        let methods = body.map(|b| self.method_names(b)).unwrap_or_default();

        ClassDecl {
            name: self.field_text(node, "name"),
            line: line_of(node),
            bases,
            methods,
            docstring: body.and_then(|b| self.docstring(b)),
        }
    }

    /// Functions declared directly in a class body, decorated or not.
    fn method_names(&self, body: Node) -> Vec<String> {
        let mut cursor = body.walk();
        body.named_children(&mut cursor)
            .filter_map(|stmt| match stmt.kind() {
                "function_definition" => Some(stmt),
                "decorated_definition" => stmt
                    .child_by_field_name("definition")
                    .filter(|def| def.kind() == "function_definition"),
                _ => None,
            })
            .map(|def| self.field_text(def, "name"))
            .collect()
    }

    /// `a.b.c` for attribute chains, source text for anything else.
    fn dotted_or_text(&self, node: Node) -> String {
        let mut parts = Vec::new();
        let mut current = node;
        while current.kind() == "attribute" {
            let object = current.child_by_field_name("object");
            let attribute = current.child_by_field_name("attribute");
            let (Some(object), Some(attribute)) = (object, attribute) else {
                break;
            };
            parts.push(self.text(attribute));
            current = object;
        }
        parts.push(self.text(current));
        parts.reverse();
        parts.join(".")
    }

    fn call_expr(&self, node: Node) -> CallExpr {
        let callee = match node.child_by_field_name("function") {
            Some(f) if f.kind() == "identifier" => Callee::Name(self.text(f)),
            Some(f) if f.kind() == "attribute" => Callee::Attribute {
                receiver: self.field_text(f, "object"),
                attribute: self.field_text(f, "attribute"),
            },
            _ => Callee::Computed,
        };
        CallExpr {
            callee,
            line: line_of(node),
        }
    }

    fn import_decl(&self, node: Node) -> ImportDecl {
        let mut cursor = node.walk();
        let modules = node
            .children_by_field_name("name", &mut cursor)
            .filter_map(|name| self.imported_module(name))
            .collect();
        ImportDecl {
            modules,
            line: line_of(node),
        }
    }

    /// Module of a `dotted_name` or of the imported side of `x as y`.
    fn imported_module(&self, node: Node) -> Option<String> {
        match node.kind() {
            "dotted_name" => Some(self.dotted_text(node)),
            "aliased_import" => node
                .child_by_field_name("name")
                .map(|n| self.dotted_text(n)),
            _ => None,
        }
    }

    fn import_from_decl(&self, node: Node) -> ImportFromDecl {
        let (module, level) = if node.kind() == "future_import_statement" {
            (Some("__future__".to_string()), 0)
        } else {
            match node.child_by_field_name("module_name") {
                Some(m) if m.kind() == "relative_import" => self.relative_module(m),
                Some(m) => (Some(self.dotted_text(m)), 0),
                None => (None, 0),
            }
        };

        let mut cursor = node.walk();
        let mut names: Vec<String> = node
            .children_by_field_name("name", &mut cursor)
            .filter_map(|name| self.imported_module(name))
            .collect();
        let mut cursor = node.walk();
        if node
            .named_children(&mut cursor)
            .any(|c| c.kind() == "wildcard_import")
        {
            names.push("*".to_string());
        }

        ImportFromDecl {
            module,
            level,
            names,
            line: line_of(node),
        }
    }

    /// `..pkg.mod` → (`Some("pkg.mod")`, 2); `.` → (`None`, 1).
    fn relative_module(&self, node: Node) -> (Option<String>, u32) {
        let mut level = 0;
        let mut module = None;
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "import_prefix" => level = self.text(child).matches('.').count() as u32,
                "dotted_name" => module = Some(self.dotted_text(child)),
                _ => {}
            }
        }
        (module, level)
    }

    /// Identifiers of a `dotted_name` joined with dots, whitespace dropped.
    fn dotted_text(&self, node: Node) -> String {
        let mut cursor = node.walk();
        let parts: Vec<String> = node
            .named_children(&mut cursor)
            .filter(|c| c.kind() == "identifier")
            .map(|c| self.text(c))
            .collect();
        if parts.is_empty() {
            self.text(node)
        } else {
            parts.join(".")
        }
    }

    /// Cleaned text of a leading string-literal statement in `body`.
    fn docstring(&self, body: Node) -> Option<String> {
        let mut cursor = body.walk();
        let first = body
            .named_children(&mut cursor)
            .find(|stmt| stmt.kind() != "comment")?;
        if first.kind() != "expression_statement" || first.named_child_count() != 1 {
            return None;
        }
        let mut inner = first.walk();
        let expr = first.named_children(&mut inner).next()?;
        let raw = self.literal_value(expr)?;
        Some(docstring::clean(&raw))
    }

    /// Decoded value of a plain string literal or an implicit concatenation
    /// of them. Bytes and f-strings have no value here.
    fn literal_value(&self, node: Node) -> Option<String> {
        match node.kind() {
            "string" => {
                let mut cursor = node.walk();
                let children: Vec<Node> = node.children(&mut cursor).collect();
                let start = children.iter().find(|c| c.kind() == "string_start")?;
                let end = children.iter().rev().find(|c| c.kind() == "string_end")?;

                let opener = self.text(*start).to_ascii_lowercase();
                let prefix = opener.trim_end_matches(['"', '\'']);
                if prefix.contains(['b', 'f', 't']) {
                    return None;
                }

                let body = self
                    .source
                    .get(start.end_byte()..end.start_byte())
                    .and_then(|bytes| std::str::from_utf8(bytes).ok())?;
                Some(docstring::decode_literal(body, prefix.contains('r')))
            }
            "concatenated_string" => {
                let mut cursor = node.walk();
                let parts: Option<Vec<String>> = node
                    .named_children(&mut cursor)
                    .filter(|c| c.kind() != "comment")
                    .map(|part| self.literal_value(part))
                    .collect();
                parts.map(|p| p.concat())
            }
            _ => None,
        }
    }
}

/// The function a `decorated_definition` wraps, if it wraps one.
fn decorated_function(node: Node) -> Option<Node> {
    node.child_by_field_name("definition")
        .filter(|def| def.kind() == "function_definition")
}

fn line_of(node: Node) -> u32 {
    node.start_position().row as u32 + 1
}
