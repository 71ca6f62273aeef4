//! Shared constants for the analysis engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory names never enumerated or descended into.
pub const IGNORED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    "venv",
    "env",
    ".venv",
    "dist",
    "build",
    ".idea",
    ".vscode",
    "target",
];

/// File names never listed in a tree snapshot.
pub const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db", ".gitignore"];

/// README candidates, in priority order.
pub const README_CANDIDATES: &[&str] = &["README.md", "readme.md", "README", "README.txt"];

/// Conventional program-start file names.
pub const ENTRY_POINT_NAMES: &[&str] = &[
    "main.py",
    "app.py",
    "__main__.py",
    "index.py",
    "main.jac",
    "app.jac",
    "cli.py",
];

/// Default analyzable extensions (without the leading dot).
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["py", "jac"];

/// Default number of worker threads for sharded analysis (0 = rayon default).
pub const DEFAULT_THREADS: usize = 0;

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "CCG_LOG";

/// Filter used when `CCG_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "ccg=info";
