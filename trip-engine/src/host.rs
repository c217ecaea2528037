//! Where rendered markup goes.

/// The mount point for rendered markup. Returns `false` when the host
/// has no container to inject into — an expected state while the view
/// is not mounted, not an error.
pub trait RenderHost: Send {
    fn mount(&mut self, markup: &str) -> bool;
}

/// Host that keeps the latest markup in memory. Used by tests and by
/// embedders that ship the markup elsewhere themselves.
#[derive(Debug, Default)]
pub struct BufferHost {
    markup: String,
    mounts: usize,
}

impl BufferHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn mounts(&self) -> usize {
        self.mounts
    }
}

impl RenderHost for BufferHost {
    fn mount(&mut self, markup: &str) -> bool {
        self.markup = markup.to_string();
        self.mounts += 1;
        true
    }
}

/// Host with no mount point at all.
#[derive(Debug, Default)]
pub struct DetachedHost;

impl RenderHost for DetachedHost {
    fn mount(&mut self, _markup: &str) -> bool {
        false
    }
}
