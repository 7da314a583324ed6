//! Message classification.
//!
//! The dispatcher at the center of the chat pipeline: an ordered chain of
//! named rules evaluated over the lower-cased message. The first rule to
//! claim a message produces the reply; the chain order is part of the
//! contract and must not be rearranged.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

use super::intents::IntentTable;
use super::{ohm, resistors};

/// Matches bare numbers: digits with an optional decimal part.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("Invalid regex: number pattern"));

/// Explanation commands, checked in this literal order.
const EXPLAIN_COMMANDS: [(&str, Topic); 4] = [
    ("explain ohm", Topic::Ohm),
    ("explain and", Topic::And),
    ("explain or", Topic::Or),
    ("explain not", Topic::Not),
];

/// Tags introducing key=value Ohm input.
const OHM_TAGS: [&str; 3] = ["v=", "i=", "r="];

/// Keywords that trigger resistor-network extraction.
const RESISTOR_KEYWORDS: [&str; 3] = ["resistor", "series", "parallel"];

/// Default reply when no rule matches.
pub const FALLBACK: &str = "I can explain Ohm's Law, logic gates, or solve resistor problems.";

/// Explanation panel topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Ohm,
    And,
    Or,
    Not,
}

impl Topic {
    /// Returns the wire label for the topic
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Ohm => "ohm",
            Topic::And => "and",
            Topic::Or => "or",
            Topic::Not => "not",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Structured reply rendered by the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Reply {
    /// The client opens the explanation panel for `topic`.
    Explain { topic: Topic },
    /// Plain text rendered verbatim.
    Text { text: String },
}

impl Reply {
    /// Shorthand for a plain-text reply.
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text { text: text.into() }
    }
}

type Rule = fn(&MessageClassifier, &str) -> Option<Reply>;

/// Ordered message classifier.
///
/// The intent table is injected at construction, so alternate tables can be
/// exercised in isolation. Classification is a pure function of (message,
/// table): no locking is needed to share one classifier across requests.
pub struct MessageClassifier {
    table: IntentTable,
}

impl MessageClassifier {
    /// The rule chain. Rules later in the chain never see a message claimed
    /// by an earlier one.
    const RULES: [(&'static str, Rule); 4] = [
        ("explain_command", Self::explain_rule),
        ("ohm_values", Self::ohm_rule),
        ("resistor_numbers", Self::resistor_rule),
        ("intent_table", Self::intent_rule),
    ];

    pub fn new(table: IntentTable) -> Self {
        Self { table }
    }

    /// The injected intent table.
    pub fn table(&self) -> &IntentTable {
        &self.table
    }

    /// Classify one message into a reply.
    pub fn classify(&self, message: &str) -> Reply {
        let lowered = message.to_lowercase();
        let lowered = lowered.trim();

        for (name, rule) in Self::RULES {
            if let Some(reply) = rule(self, lowered) {
                debug!(rule = name, "message classified");
                return reply;
            }
        }

        debug!("no rule matched, using fallback");
        Reply::text(FALLBACK)
    }

    /// Rule 1: literal explanation commands.
    fn explain_rule(&self, message: &str) -> Option<Reply> {
        EXPLAIN_COMMANDS
            .iter()
            .find(|(command, _)| message.contains(command))
            .map(|&(_, topic)| Reply::Explain { topic })
    }

    /// Rule 2: key=value Ohm input, tags in any order mixed with other text.
    fn ohm_rule(&self, message: &str) -> Option<Reply> {
        if !OHM_TAGS.iter().any(|tag| message.contains(tag)) {
            return None;
        }
        let voltage = grab(message, "v=");
        let current = grab(message, "i=");
        let resistance = grab(message, "r=");
        Some(Reply::text(ohm::solve(
            voltage.as_deref(),
            current.as_deref(),
            resistance.as_deref(),
        )))
    }

    /// Rule 3: resistor keywords with numbers anywhere in the message.
    /// Without numbers the message falls through to the intent table.
    fn resistor_rule(&self, message: &str) -> Option<Reply> {
        if !RESISTOR_KEYWORDS
            .iter()
            .any(|keyword| message.contains(keyword))
        {
            return None;
        }
        let numbers: Vec<&str> = NUMBER.find_iter(message).map(|m| m.as_str()).collect();
        if numbers.is_empty() {
            return None;
        }
        Some(Reply::text(resistors::solve(&numbers.join(","))))
    }

    /// Rule 4: table-driven canned responses, first record and first
    /// response win. A matched record with no responses falls through.
    fn intent_rule(&self, message: &str) -> Option<Reply> {
        let record = self.table.match_message(message)?;
        let response = record.responses.first()?;
        Some(Reply::text(response.clone()))
    }
}

/// The token immediately after `tag`: the run of non-whitespace characters,
/// tolerating whitespace between tag and token. A tag at the end of the
/// input resolves to `None` (missing) rather than panicking.
fn grab(message: &str, tag: &str) -> Option<String> {
    let (_, rest) = message.split_once(tag)?;
    rest.split_whitespace().next().map(str::to_string)
}
