use regex_syntax::hir::literal::{ExtractKind, Extractor};

/// Mine literal fragments from a regex pattern for use as Aho-Corasick
/// prefilter candidates: every match of the pattern starts with one of the
/// returned fragments, so an input containing none of them can skip the
/// regex entirely.
///
/// Returns `None` when no usable fragment set exists — the pattern does not
/// parse with `regex_syntax` (exotic PCRE-isms), the prefix set is unbounded,
/// or any fragment is shorter than `min_len` (dropping only the short ones
/// would let matches slip past the prefilter).  Such entries must be tried
/// on every input.
pub(crate) fn prefilter_fragments(pattern: &str, min_len: usize) -> Option<Vec<String>> {
    let hir = regex_syntax::parse(pattern).ok()?;

    let mut extractor = Extractor::new();
    extractor.kind(ExtractKind::Prefix);
    let seq = extractor.extract(&hir);

    let literals = seq.literals()?;
    if literals.is_empty() {
        return None;
    }

    let mut fragments = Vec::with_capacity(literals.len());
    for lit in literals {
        let s = std::str::from_utf8(lit.as_bytes()).ok()?;
        if s.len() < min_len {
            return None;
        }
        fragments.push(s.to_string());
    }

    Some(fragments)
}
