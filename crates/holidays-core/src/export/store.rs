//! Output store trait and abstractions

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Destination for published files
///
/// A run stages a complete output set and publishes it in one step:
/// `reset`, any number of `write`s, then `commit`. Until `commit` the
/// previously published set stays as it was; `abort` throws the staged
/// set away. Paths are relative to the store's root.
pub trait OutputStore: Send + Sync {
    /// Start an empty staged set containing `dirs`
    fn reset(&self, dirs: &[PathBuf]) -> Result<()>;

    /// Stage a file, replacing any previous content
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Replace the published set with the staged one
    fn commit(&self) -> Result<()>;

    /// Discard the staged set
    fn abort(&self) -> Result<()>;
}
