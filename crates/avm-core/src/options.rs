/// What a batch run does when a label cannot be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Stop the run at the first unresolvable label. No row is written for
    /// the failing record and nothing after it is processed.
    #[default]
    Abort,
    /// Skip the failing record, report it, and continue with the next one.
    Skip,
}

impl UnresolvedPolicy {
    pub const fn is_abort(self) -> bool {
        matches!(self, Self::Abort)
    }
}
