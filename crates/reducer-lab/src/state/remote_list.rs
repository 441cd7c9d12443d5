//! Remote List State
//!
//! State for a list fetched once per mount from an external source.

/// Load status of a remote list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Waiting for the fetch of the current mount. A failed fetch leaves
    /// the list here.
    #[default]
    Loading,
    Loaded,
}

/// A list fetched from an external source
///
/// `generation` identifies the mount the list belongs to; responses tagged
/// with an older generation are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteList<T> {
    pub generation: u64,
    pub status: LoadStatus,
    pub items: Vec<T>,
    pub cursor: usize,
}

impl<T> Default for RemoteList<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            status: LoadStatus::Loading,
            items: Vec::new(),
            cursor: 0,
        }
    }
}

impl<T> RemoteList<T> {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Fresh state for a new mount
    pub fn remounted(&self) -> Self {
        Self {
            generation: self.generation.wrapping_add(1),
            ..Self::default()
        }
    }
}
