use serde_json::Value;

/// Why a line could not be recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Blank after trimming surrounding whitespace
    Empty,
    /// No repair strategy produced valid JSON
    Unfixable,
}

/// Result of running one raw line through the repair chain.
///
/// Exactly one variant holds per line; there is no partial state.
#[derive(Debug, Clone, PartialEq)]
pub enum RepairOutcome {
    /// Parsed verbatim, no repair needed
    Parsed(Value),
    /// Parsed only after a text transform or prefix extraction was applied
    Fixed(Value),
    /// Dropped from the output; the reason is only ever counted
    Unrecoverable(DropReason),
}

impl RepairOutcome {
    /// The recovered record, if any.
    pub fn record(&self) -> Option<&Value> {
        match self {
            RepairOutcome::Parsed(record) | RepairOutcome::Fixed(record) => Some(record),
            RepairOutcome::Unrecoverable(_) => None,
        }
    }
}
