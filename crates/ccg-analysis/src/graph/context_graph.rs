//! The four graph tables and their queries.

use rustc_hash::FxHashMap;

use crate::parsers::{ParsedFile, SyntaxNode};

use super::call_edges::CallEdges;
use super::types::{AnalysisOutcome, CcgExport, ClassHierarchy, ClassRecord, FunctionRecord};

/// Function, class, call and import tables for one analysis session.
///
/// Functions and classes share a single global namespace: a later record
/// with the same name replaces the earlier one, whatever its file.
#[derive(Debug, Clone, Default)]
pub struct CodeContextGraph {
    functions: FxHashMap<String, FunctionRecord>,
    classes: FxHashMap<String, ClassRecord>,
    calls: CallEdges,
    imports: FxHashMap<String, Vec<String>>,
}

impl CodeContextGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record everything a parsed file declares.
    pub fn ingest(&mut self, parsed: &ParsedFile) -> AnalysisOutcome {
        let file = parsed.path.display().to_string();
        let mut outcome = AnalysisOutcome::default();
        let mut imports = Vec::new();

        for node in &parsed.nodes {
            match node {
                SyntaxNode::Function(decl) => {
                    for callee in decl.calls.iter().filter_map(|c| c.bare_name()) {
                        self.calls.push(&decl.name, callee);
                        outcome.calls += 1;
                    }
                    self.functions.insert(
                        decl.name.clone(),
                        FunctionRecord {
                            name: decl.name.clone(),
                            file: file.clone(),
                            line: decl.line,
                            params: decl.params.clone(),
                            docstring: decl.docstring.clone(),
                            is_async: decl.is_async,
                        },
                    );
                    outcome.functions += 1;
                }
                SyntaxNode::Class(decl) => {
                    self.classes.insert(
                        decl.name.clone(),
                        ClassRecord {
                            name: decl.name.clone(),
                            file: file.clone(),
                            line: decl.line,
                            bases: decl.bases.clone(),
                            methods: decl.methods.clone(),
                            docstring: decl.docstring.clone(),
                        },
                    );
                    outcome.classes += 1;
                }
                // Already attached to the enclosing functions.
                SyntaxNode::Call(_) => {}
                SyntaxNode::Import(decl) => imports.extend(decl.modules.iter().cloned()),
                SyntaxNode::ImportFrom(decl) => imports.extend(decl.module.iter().cloned()),
            }
        }

        outcome.imports = imports.len();
        if !imports.is_empty() {
            self.imports.insert(file, imports);
        }
        outcome
    }

    pub fn get_function(&self, name: &str) -> Option<&FunctionRecord> {
        self.functions.get(name)
    }

    pub fn get_class(&self, name: &str) -> Option<&ClassRecord> {
        self.classes.get(name)
    }

    /// Callers of `name`, one entry per call site.
    pub fn get_function_callers(&self, name: &str) -> Vec<String> {
        self.calls.callers_of(name)
    }

    pub fn get_function_callees(&self, name: &str) -> &[String] {
        self.calls.callees(name)
    }

    pub fn get_class_hierarchy(&self, name: &str) -> Option<ClassHierarchy> {
        self.classes.get(name).map(ClassHierarchy::from)
    }

    pub fn imports_of(&self, file: &str) -> &[String] {
        self.imports.get(file).map_or(&[][..], Vec::as_slice)
    }

    pub fn call_edges(&self) -> &CallEdges {
        &self.calls
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
            && self.classes.is_empty()
            && self.calls.is_empty()
            && self.imports.is_empty()
    }

    pub fn export(&self) -> CcgExport {
        CcgExport {
            functions: self
                .functions
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            classes: self
                .classes
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            calls: self
                .calls
                .iter()
                .map(|(caller, callees)| (caller.to_string(), callees.to_vec()))
                .collect(),
            imports: self
                .imports
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}
