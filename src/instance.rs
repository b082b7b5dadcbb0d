use crate::Record;

/// Single-instance container with a combined get-or-set accessor.
///
/// Constructed explicitly and passed by reference rather than living in
/// a hidden global. The holder owns the record, so the stored instance
/// outlives every read of it. Not thread-safe: it stays on the main
/// flow, and the interrupt side only touches the atomic flag.
#[derive(Debug, Default)]
pub struct InstanceHolder {
    stored: Option<Record>,
}

impl InstanceHolder {
    pub fn new() -> Self {
        Self { stored: None }
    }

    /// With `Some(record)`, replaces the stored record (the previous one
    /// is dropped) and returns a reference to it. With `None`, a pure
    /// read of whatever is currently stored.
    pub fn access(&mut self, candidate: Option<Record>) -> Option<&Record> {
        if let Some(record) = candidate {
            self.stored = Some(record);
        }
        self.stored.as_ref()
    }
}
