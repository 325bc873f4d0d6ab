/// Result of classifying one User-Agent string.
///
/// Borrows the matched signal name from the classifier; recomputed per
/// request, never persisted.
#[derive(Debug, Clone)]
pub struct Classification<'a> {
    pub is_mobile: bool,
    /// Name of the matched signal; `None` when the visitor is non-mobile.
    pub signal: Option<&'a str>,
}
