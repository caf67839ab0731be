//! Id generation for new canvas objects.

use crate::scene::SceneHost;
use std::collections::HashSet;

/// Return `prefix` followed by the smallest positive number not already
/// used by an object in the scene.
pub fn generate_unique_id<H: SceneHost>(host: &H, prefix: &str) -> String {
    let taken: HashSet<&str> = host
        .objects()
        .map(|obj| obj.id.as_str())
        .filter(|id| id.starts_with(prefix))
        .collect();

    (1..)
        .map(|n: u64| format!("{prefix}{n}"))
        .find(|candidate| !taken.contains(candidate.as_str()))
        .unwrap_or_else(|| prefix.to_string())
}
