//! Code context graph types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A function entry in the graph, keyed by bare name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    /// Defining file, as the path was given to the builder.
    pub file: String,
    pub line: u32,
    pub params: Vec<String>,
    pub docstring: Option<String>,
    pub is_async: bool,
}

/// A class entry in the graph, keyed by bare name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub file: String,
    pub line: u32,
    pub bases: Vec<String>,
    pub methods: Vec<String>,
    pub docstring: Option<String>,
}

/// Single-level hierarchy of one class. Bases are not resolved further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassHierarchy {
    pub name: String,
    pub bases: Vec<String>,
    pub methods: Vec<String>,
}

impl From<&ClassRecord> for ClassHierarchy {
    fn from(record: &ClassRecord) -> Self {
        Self {
            name: record.name.clone(),
            bases: record.bases.clone(),
            methods: record.methods.clone(),
        }
    }
}

/// Snapshot of all four tables.
///
/// Maps are sorted so serialized output is stable; list order is
/// preserved exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcgExport {
    pub functions: BTreeMap<String, FunctionRecord>,
    pub classes: BTreeMap<String, ClassRecord>,
    /// caller -> callees, repeated per call site.
    pub calls: BTreeMap<String, Vec<String>>,
    /// file -> imported module names.
    pub imports: BTreeMap<String, Vec<String>>,
}

impl CcgExport {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
            && self.classes.is_empty()
            && self.calls.is_empty()
            && self.imports.is_empty()
    }

    /// Fold `other` in as if its files had been analyzed after ours:
    /// records overwrite by name, a file's import list is replaced, and
    /// call lists append.
    pub fn merge(&mut self, other: CcgExport) {
        self.functions.extend(other.functions);
        self.classes.extend(other.classes);
        self.imports.extend(other.imports);
        for (caller, callees) in other.calls {
            self.calls.entry(caller).or_default().extend(callees);
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// What one successfully analyzed file contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub functions: usize,
    pub classes: usize,
    /// Call edges appended (bare-name callees only).
    pub calls: usize,
    pub imports: usize,
}

/// Totals over a batch of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    pub files_analyzed: usize,
    pub files_failed: usize,
    pub functions: usize,
    pub classes: usize,
    pub calls: usize,
    pub imports: usize,
}

impl BatchStats {
    pub fn record(&mut self, outcome: &AnalysisOutcome) {
        self.files_analyzed += 1;
        self.functions += outcome.functions;
        self.classes += outcome.classes;
        self.calls += outcome.calls;
        self.imports += outcome.imports;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export_with_call(caller: &str, callee: &str) -> CcgExport {
        let mut export = CcgExport::default();
        export
            .calls
            .insert(caller.to_string(), vec![callee.to_string()]);
        export
    }

    #[test]
    fn test_merge_appends_calls() {
        let mut left = export_with_call("a", "b");
        left.merge(export_with_call("a", "c"));

        assert_eq!(left.calls["a"], vec!["b", "c"]);
    }

    #[test]
    fn test_merge_replaces_imports_per_file() {
        let mut left = CcgExport::default();
        left.imports.insert("m.py".to_string(), vec!["os".to_string()]);
        let mut right = CcgExport::default();
        right.imports.insert("m.py".to_string(), vec!["sys".to_string()]);

        left.merge(right);
        assert_eq!(left.imports["m.py"], vec!["sys"]);
    }

    #[test]
    fn test_json_round_trip_keeps_list_order() {
        let mut export = export_with_call("main", "zeta");
        export
            .calls
            .get_mut("main")
            .unwrap()
            .extend(["alpha".to_string(), "zeta".to_string()]);

        let json = export.to_json().unwrap();
        let back = CcgExport::from_json(&json).unwrap();
        assert_eq!(back, export);
        assert_eq!(back.calls["main"], vec!["zeta", "alpha", "zeta"]);
    }

    #[test]
    fn test_batch_stats_record() {
        let mut stats = BatchStats::default();
        stats.record(&AnalysisOutcome {
            functions: 2,
            classes: 1,
            calls: 3,
            imports: 0,
        });
        assert_eq!(stats.files_analyzed, 1);
        assert_eq!(stats.calls, 3);
    }
}
