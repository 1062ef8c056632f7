// Existence probe port - the operation exported to external callers

/// Reports whether an entry currently exists at a path
///
/// Any string is accepted: empty, relative, or under a missing parent. The
/// answer reflects filesystem state at call time only.
pub trait ExistenceProbe: Send + Sync {
    /// `true` iff an entry exists at `path`. Never panics; undeterminable
    /// paths count as absent.
    ///
    /// # Example
    /// ```text
    /// if probe.file_exists("/etc/hosts") {
    ///     println!("hosts file present");
    /// }
    /// ```
    fn file_exists(&self, path: &str) -> bool;
}

