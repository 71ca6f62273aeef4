//! Tree Enumerator: directory snapshots and source discovery over a fixed
//! noise-name ignore set.

mod ignores;
mod types;
mod walker;

pub use ignores::IgnoreSet;
pub use types::{split_extension, TreeNode};
pub use walker::TreeEnumerator;
