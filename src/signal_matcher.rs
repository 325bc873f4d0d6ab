use aho_corasick::AhoCorasick;

use crate::db::SignalEntry;
use crate::error::Result;
use crate::literal::prefilter_fragments;

/// Minimum fragment length for regex prefilter candidates.  Shorter
/// fragments occur in nearly every User-Agent string and make the
/// prefilter worthless.
const MIN_FRAGMENT_LEN: usize = 3;

/// One regex-flavored signal.
struct RegexSignal {
    /// Position in the signal database (reporting order).
    entry: usize,
    regex: fancy_regex::Regex,
    /// No usable prefilter fragment — run on every input.
    always: bool,
}

/// Compiled matching engine over the signal database.
///
/// Literal signals are matched by a single ASCII-case-insensitive
/// Aho-Corasick automaton.  Regex signals run through `fancy_regex`, gated
/// by a second automaton of literal fragments mined from their patterns: a
/// regex is only tried when one of its fragments occurs in the input, or
/// when no fragment could be mined from it.
pub(crate) struct SignalMatcher {
    literals: AhoCorasick,
    /// Maps literal automaton pattern index → database entry index.
    literal_to_entry: Vec<usize>,
    regexes: Vec<RegexSignal>,
    prefilter: AhoCorasick,
    /// Maps prefilter pattern index → index into `regexes`.
    prefilter_to_regex: Vec<usize>,
}

impl SignalMatcher {
    pub fn build(entries: &[SignalEntry]) -> Result<Self> {
        let mut literal_patterns: Vec<&str> = Vec::new();
        let mut literal_to_entry: Vec<usize> = Vec::new();
        let mut regexes: Vec<RegexSignal> = Vec::new();
        let mut fragment_patterns: Vec<String> = Vec::new();
        let mut prefilter_to_regex: Vec<usize> = Vec::new();

        for (idx, entry) in entries.iter().enumerate() {
            if !entry.regex {
                literal_patterns.push(&entry.pattern);
                literal_to_entry.push(idx);
                continue;
            }

            // Case-insensitive, matching anywhere in the UA string.
            let compiled = fancy_regex::Regex::new(&format!("(?i){}", entry.pattern))?;
            let fragments = prefilter_fragments(&entry.pattern, MIN_FRAGMENT_LEN);
            let always = fragments.is_none();
            for fragment in fragments.into_iter().flatten() {
                fragment_patterns.push(fragment);
                prefilter_to_regex.push(regexes.len());
            }
            regexes.push(RegexSignal {
                entry: idx,
                regex: compiled,
                always,
            });
        }

        let literals = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&literal_patterns)?;
        let prefilter = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&fragment_patterns)?;

        Ok(Self {
            literals,
            literal_to_entry,
            regexes,
            prefilter,
            prefilter_to_regex,
        })
    }

    /// Index of the matching entry with the lowest database position, or
    /// `None` when nothing matches.  The boolean outcome (any match) does
    /// not depend on database order; the index only selects the signal
    /// reported in logs.
    pub fn match_first(&self, ua: &str) -> Option<usize> {
        let best_literal = self
            .literals
            .find_overlapping_iter(ua)
            .map(|m| self.literal_to_entry[m.pattern().as_usize()])
            .min();

        if self.regexes.is_empty() {
            return best_literal;
        }

        // Regex candidates: prefilter hits, plus always-run entries.
        let mut candidate = vec![false; self.regexes.len()];
        for m in self.prefilter.find_overlapping_iter(ua) {
            candidate[self.prefilter_to_regex[m.pattern().as_usize()]] = true;
        }

        let mut best = best_literal;
        for (slot, signal) in self.regexes.iter().enumerate() {
            if !signal.always && !candidate[slot] {
                continue;
            }
            // Entries are stored in database order; a match here can only
            // matter while it improves on the current best.
            if best.is_some_and(|b| b <= signal.entry) {
                break;
            }
            if signal.regex.is_match(ua).unwrap_or(false) {
                best = Some(signal.entry);
            }
        }

        best
    }
}
