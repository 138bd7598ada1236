//! Texture reference collection
//!
//! Scans raw MTL lines for one map directive and gathers the referenced image
//! files, independent of which material they belong to.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

/// Collect the image files referenced by `token` (e.g. `map_Kd`), each joined
/// onto `prefix`.
///
/// Lines are split on single spaces after stripping leading whitespace, so the
/// file name is the second field. Lines that are blank, carry a different
/// directive, or have no file name are skipped. Duplicates are kept; see
/// [`dedup_preserving_order`].
pub fn collect_images_by_token<S: AsRef<str>>(lines: &[S], token: &str, prefix: &Path) -> Vec<PathBuf> {
    lines
        .iter()
        .filter_map(|line| {
            let mut fields = line.as_ref().trim_start().split(' ');
            if fields.next()? != token {
                return None;
            }
            match fields.next() {
                Some(file) if !file.is_empty() => Some(prefix.join(file)),
                _ => None,
            }
        })
        .collect()
}

/// Remove duplicates, keeping the first occurrence of each item in order
pub fn dedup_preserving_order<T: Eq + Hash + Clone>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
