//!
//! Scrubbing of form-encoded request bodies.
//!
//! Gateways which talk `application/x-www-form-urlencoded` put card numbers and security codes
//! straight into the body. Before such a body is logged or stored, every value whose field name
//! has a [`RedactionRule`] is replaced. Field order and every other byte of the body are kept, so
//! the scrubbed transcript can still be compared against what was sent.
//!

use std::borrow::Cow;

/// Placeholder written in place of a redacted value.
pub const FILTERED: &str = "[FILTERED]";

/// Replace the value of `field` with `replacement`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedactionRule {
    /// Field name as it appears on the wire, prefix included.
    pub field: &'static str,
    /// Text substituted for the value.
    pub replacement: &'static str,
}

impl RedactionRule {
    /// Rule which replaces the value of `field` with [`FILTERED`].
    pub const fn filtered(field: &'static str) -> Self {
        Self {
            field,
            replacement: FILTERED,
        }
    }
}

/// Applies a fixed set of [`RedactionRule`]s to form-encoded bodies.
#[derive(Clone, Copy, Debug)]
pub struct FormScrubber {
    rules: &'static [RedactionRule],
}

impl FormScrubber {
    /// Create a scrubber over a static rule table.
    pub const fn new(rules: &'static [RedactionRule]) -> Self {
        Self { rules }
    }

    /// Return `body` with the value of every ruled field replaced.
    ///
    /// Pairs without a `=` and fields without a rule pass through untouched. Borrows when
    /// nothing had to change.
    pub fn scrub<'a>(&self, body: &'a str) -> Cow<'a, str> {
        if !body.split('&').any(|pair| self.rule_for(pair).is_some()) {
            return Cow::Borrowed(body);
        }

        let scrubbed = body
            .split('&')
            .map(|pair| match self.rule_for(pair) {
                Some(rule) => Cow::Owned(format!("{}={}", rule.field, rule.replacement)),
                None => Cow::Borrowed(pair),
            })
            .collect::<Vec<_>>()
            .join("&");

        Cow::Owned(scrubbed)
    }

    fn rule_for(&self, pair: &str) -> Option<&'static RedactionRule> {
        let (field, _) = pair.split_once('=')?;
        self.rules.iter().find(|rule| rule.field == field)
    }
}
