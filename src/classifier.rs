use std::path::Path;

use crate::db::SignalEntry;
use crate::error::{Error, Result};
use crate::signal_matcher::SignalMatcher;
use crate::types::{Classification, RoutingDecision};

/// Default signal database, compiled into the binary.
const EMBEDDED_SIGNALS: &str = include_str!("../data/signals.yml");

/// Where non-mobile visitors are sent unless the target is overridden.
const DEFAULT_REDIRECT_TARGET: &str = "/";

/// Classifies User-Agent strings as mobile or non-mobile and turns the
/// result into a routing decision for the mobile-only route.
///
/// Built once at startup.  Classification is a pure function of the UA
/// string over immutable compiled data, so one instance serves arbitrarily
/// many concurrent requests without coordination.
pub struct UaClassifier {
    matcher: SignalMatcher,
    /// Signal names indexed by database position.
    names: Vec<String>,
    redirect_target: String,
}

impl UaClassifier {
    /// Build from the embedded default signal database.
    pub fn from_embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED_SIGNALS)
    }

    /// Build from an operator-supplied signal database file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    fn from_yaml(content: &str) -> Result<Self> {
        let entries: Vec<SignalEntry> = serde_yaml::from_str(content)?;
        // A gate with nothing to match would redirect every visitor.
        if entries.is_empty() {
            return Err(Error::EmptySignalSet);
        }
        let matcher = SignalMatcher::build(&entries)?;
        let names = entries.into_iter().map(|e| e.name).collect();
        Ok(Self {
            matcher,
            names,
            redirect_target: DEFAULT_REDIRECT_TARGET.to_string(),
        })
    }

    /// Override the redirect target for non-mobile visitors.
    pub fn with_redirect_target(mut self, target: impl Into<String>) -> Self {
        self.redirect_target = target.into();
        self
    }

    /// Number of signals in the compiled database.
    pub fn signal_count(&self) -> usize {
        self.names.len()
    }

    /// Classify a User-Agent string.
    ///
    /// Total: empty and unrecognized strings classify as non-mobile, which
    /// is valid input, not an error.
    pub fn classify(&self, ua: &str) -> Classification<'_> {
        match self.matcher.match_first(ua) {
            Some(idx) => Classification {
                is_mobile: true,
                signal: Some(&self.names[idx]),
            },
            None => Classification {
                is_mobile: false,
                signal: None,
            },
        }
    }

    /// Map a classification onto the decision for the mobile-only route.
    pub fn decision(&self, classification: &Classification<'_>) -> RoutingDecision<'_> {
        if classification.is_mobile {
            RoutingDecision::Continue
        } else {
            RoutingDecision::RedirectTo(&self.redirect_target)
        }
    }

    /// Classify and decide in one step: mobile visitors pass through,
    /// everyone else is sent to the redirect target.
    pub fn decide(&self, ua: &str) -> RoutingDecision<'_> {
        self.decision(&self.classify(ua))
    }
}
