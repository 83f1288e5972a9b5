//! Configuration access port trait.

/// Read-only access to sectioned key/value configuration.
///
/// Values come back as trimmed raw text; typing and range checks belong to
/// the domain so that a malformed value can be told apart from a missing one.
pub trait ConfigPort {
    /// `None` when the section or key is absent or the value is blank.
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
}
