use std::collections::BTreeMap;

use url::form_urlencoded;

/// Link-bar history cap. Old entries fall off the far end.
const MAX_HISTORY: usize = 64;

/// Decodes a query string (`a=1&b=two`, percent-encoded UTF-8) into a sorted
/// parameter map. Repeated keys keep the last occurrence.
pub fn parse_query(query: &str) -> BTreeMap<String, String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}

/// Encodes a parameter map back into a percent-encoded query string. Keys are
/// emitted in sorted order, so encode(parse(s)) is a stable normal form and
/// round-trips are order-independent.
pub fn encode_query(params: &BTreeMap<String, String>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// The console's navigable location: a query string plus a bounded history of
/// entries. The desktop stand-in for a browser address bar — an admin can
/// copy the current view's link or paste one to restore the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBar {
    entries: Vec<String>,
}

impl Default for LinkBar {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkBar {
    pub fn new() -> Self {
        Self {
            entries: vec![String::new()],
        }
    }

    /// The current entry's query string (no leading `?`).
    pub fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("")
    }

    pub fn read(&self, name: &str) -> Option<String> {
        parse_query(self.current()).remove(name)
    }

    /// Sets or removes one parameter on the current entry, in place: the full
    /// current parameter set is read first so concurrent parameters never
    /// clobber each other, and no new history entry is created. Applying the
    /// same value twice is a no-op.
    pub fn apply(&mut self, name: &str, value: Option<&str>) {
        let mut params = parse_query(self.current());
        match value {
            Some(value) if !value.is_empty() => {
                params.insert(name.to_string(), value.to_string());
            }
            _ => {
                params.remove(name);
            }
        }
        let encoded = encode_query(&params);
        if let Some(current) = self.entries.last_mut() {
            if *current != encoded {
                *current = encoded;
            }
        }
    }

    /// Replaces the whole current entry with an already-built parameter set.
    /// Used when a view switches resource and its persisted state is rebuilt
    /// wholesale.
    pub fn replace(&mut self, params: &BTreeMap<String, String>) {
        let encoded = encode_query(params);
        if let Some(current) = self.entries.last_mut() {
            *current = encoded;
        }
    }

    /// Pushes a new history entry (a pasted link, normalized on the way in).
    pub fn navigate(&mut self, query: &str) {
        let normalized = encode_query(&parse_query(query));
        if normalized == self.current() {
            return;
        }
        self.entries.push(normalized);
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
    }

    /// Steps back one entry; returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}
