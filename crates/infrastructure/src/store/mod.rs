pub mod file_tree;
pub mod http;
pub mod memory;

pub use file_tree::FileTreeStore;
pub use http::HttpStoreClient;
pub use memory::InMemoryStore;

/// Drops trailing slashes so `/a/b/` and `/a/b` name the same node.
pub(crate) fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
