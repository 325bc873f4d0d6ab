use serde::Deserialize;

// ---------------------------------------------------------------------------
// Signal database  (data/signals.yml, or an operator-supplied file)
//
// Format: ordered list of entries.  Position is meaningful: any match makes
// the visitor mobile, the lowest-positioned match is the signal reported in
// logs.
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct SignalEntry {
    /// Label reported in logs when this signal matches.
    pub name: String,
    /// Literal substring, or a regular expression when `regex` is set.
    pub pattern: String,
    #[serde(default)]
    pub regex: bool,
}
