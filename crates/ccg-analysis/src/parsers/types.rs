//! Parser output types.
//!
//! These carry only what the code context graph needs. No tree-sitter type
//! leaves the parser.

use std::path::PathBuf;

/// The syntax constructs the graph builder dispatches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Function(FunctionDecl),
    Class(ClassDecl),
    Call(CallExpr),
    Import(ImportDecl),
    ImportFrom(ImportFromDecl),
}

/// `def` / `async def` at any nesting depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    /// 1-based line of the `def` keyword's statement.
    pub line: u32,
    pub params: Vec<String>,
    pub docstring: Option<String>,
    pub is_async: bool,
    /// Every call inside the declaration, nested scopes included, in
    /// textual order.
    pub calls: Vec<CallExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub line: u32,
    /// Dotted names for identifiers and attribute chains, source text
    /// for any other base expression.
    pub bases: Vec<String>,
    /// Functions declared directly in the class body.
    pub methods: Vec<String>,
    pub docstring: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub callee: Callee,
    pub line: u32,
}

/// Shape of the expression being called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callee {
    /// `foo(...)`
    Name(String),
    /// `obj.foo(...)`
    Attribute { receiver: String, attribute: String },
    /// `handlers[k](...)`, `make()(...)`, ...
    Computed,
}

impl CallExpr {
    /// The callee name when the call target is a bare identifier.
    pub fn bare_name(&self) -> Option<&str> {
        match &self.callee {
            Callee::Name(name) => Some(name),
            _ => None,
        }
    }
}

/// `import a.b, c as d` → modules `["a.b", "c"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub modules: Vec<String>,
    pub line: u32,
}

/// `from x.y import z`. `module` is `None` for `from . import z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFromDecl {
    pub module: Option<String>,
    /// Leading dots of a relative import.
    pub level: u32,
    pub names: Vec<String>,
    pub line: u32,
}

/// One parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile {
    pub path: PathBuf,
    /// Pre-order, i.e. textual order of each construct's start.
    pub nodes: Vec<SyntaxNode>,
}

impl ParsedFile {
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.nodes.iter().filter_map(|n| match n {
            SyntaxNode::Function(f) => Some(f),
            _ => None,
        })
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.nodes.iter().filter_map(|n| match n {
            SyntaxNode::Class(c) => Some(c),
            _ => None,
        })
    }
}
