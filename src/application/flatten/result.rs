//! Flatten result

/// How much each surface changed during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenSummary {
    /// Network alias lists removed
    pub aliases_stripped: usize,
    /// Environment values rewritten
    pub env_values_rewritten: usize,
    /// ConfigMap files written back
    pub files_rewritten: usize,
    /// Proxy entries with a changed upstream or SNI
    pub proxy_entries_rewritten: usize,
}

impl FlattenSummary {
    pub fn total(&self) -> usize {
        self.aliases_stripped
            + self.env_values_rewritten
            + self.files_rewritten
            + self.proxy_entries_rewritten
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
