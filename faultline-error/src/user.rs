//! The UserFault type

use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A fault caused by the end user, such as invalid input.
///
/// User faults are meant to be shown back to the user. Each entry pairs a
/// stable code, for programs acting on the user's behalf, with a readable
/// message. Codes keep the order they were first added in; adding a code
/// again replaces its message but keeps its position.
///
/// # Example
///
/// ```rust
/// use faultline_error::UserFault;
///
/// let mut err = UserFault::new("MISSING_FIRST_NAME", "First name is required");
/// err.add("INVALID_EMAIL_ADDR", "Please provide a valid email address");
///
/// assert_eq!(
///     err.to_string(),
///     "- First name is required (MISSING_FIRST_NAME)\n\
///      - Please provide a valid email address (INVALID_EMAIL_ADDR)"
/// );
/// assert_eq!(
///     err.friendly(),
///     "- First name is required\n- Please provide a valid email address"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFault {
    // HashMap iteration order is random, `codes` keeps insertion order
    codes: Vec<String>,
    messages: HashMap<String, String>,
}

impl UserFault {
    /// Create a user fault with one entry
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        let code = code.into();
        let mut messages = HashMap::new();
        messages.insert(code.clone(), message.into());
        Self {
            codes: vec![code],
            messages,
        }
    }

    /// Add an entry, replacing the message if the code is already present
    pub fn add(&mut self, code: impl Into<String>, message: impl Into<String>) -> &mut Self {
        let code = code.into();
        if !self.messages.contains_key(&code) {
            self.codes.push(code.clone());
        }
        self.messages.insert(code, message.into());
        self
    }

    /// Add an entry with a formatted message
    pub fn add_fmt(&mut self, code: impl Into<String>, args: fmt::Arguments<'_>) -> &mut Self {
        self.add(code, args.to_string())
    }

    /// Builder form of [`add`](Self::add)
    pub fn with(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.add(code, message);
        self
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes in insertion order
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Codes mapped to their messages
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.messages
    }

    /// Messages in insertion order, without codes
    pub fn messages(&self) -> Vec<&str> {
        self.iter().map(|(_, message)| message).collect()
    }

    /// `(code, message)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.codes.iter().filter_map(|code| {
            self.messages
                .get(code)
                .map(|message| (code.as_str(), message.as_str()))
        })
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render every entry.
    ///
    /// A single entry renders as `message` or `message (code)`. Several
    /// entries render one `- ` prefixed line each, in insertion order.
    pub fn render(&self, include_codes: bool) -> String {
        let prefix = if self.len() == 1 { "" } else { "- " };
        self.iter()
            .map(|(code, message)| {
                if include_codes {
                    format!("{}{} ({})", prefix, message, code)
                } else {
                    format!("{}{}", prefix, message)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every entry with its code, same as `to_string()`
    pub fn error(&self) -> String {
        self.render(true)
    }

    /// Every entry without codes, for showing to the user
    pub fn friendly(&self) -> String {
        self.render(false)
    }
}

impl fmt::Display for UserFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

impl std::error::Error for UserFault {}

// =============================================================================
// Serialize - ordered list of {code, message} for API responses
// =============================================================================

struct Entry<'a> {
    code: &'a str,
    message: &'a str,
}

impl Serialize for Entry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entry = serializer.serialize_struct("UserFaultEntry", 2)?;
        entry.serialize_field("code", self.code)?;
        entry.serialize_field("message", self.message)?;
        entry.end()
    }
}

impl Serialize for UserFault {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (code, message) in self.iter() {
            seq.serialize_element(&Entry { code, message })?;
        }
        seq.end()
    }
}
