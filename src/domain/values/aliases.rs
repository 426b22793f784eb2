//! Candidate-symbol resolution.
//!
//! Some vendors reject an index or FX symbol under one spelling but accept
//! another. Each table entry lists the spellings to try, in order; the first
//! one a provider accepts wins.

use crate::domain::entities::settings::Settings;

/// Built-in candidate lists. Order is significant.
const BUILT_IN: &[(&str, &[&str])] = &[
    ("^GDAXI", &["^GDAXI", "GER40", "DE40", "DAX", "GER30"]),
    ("GER30", &["GER30", "^GDAXI", "GER40", "DE40", "DAX"]),
    ("EURUSD=X", &["EURUSD=X", "EURUSD", "EURUSD:CUR", "EUR/USD"]),
    ("EUR/USD", &["EURUSD=X", "EURUSD", "EUR/USD"]),
];

fn built_in(symbol: &str) -> Option<&'static [&'static str]> {
    BUILT_IN
        .iter()
        .find(|(key, _)| *key == symbol)
        .map(|(_, candidates)| *candidates)
}

/// Candidates from the built-in table only. A symbol without an entry
/// resolves to itself.
pub fn resolve_builtin(symbol: &str) -> Vec<String> {
    match built_in(symbol) {
        Some(candidates) => candidates.iter().map(|c| c.to_string()).collect(),
        None => vec![symbol.to_string()],
    }
}

/// Candidates with user-configured aliases merged in. A user entry for a
/// symbol replaces the built-in list for that symbol outright.
pub fn resolve(symbol: &str, settings: &Settings) -> Vec<String> {
    if let Some(user) = settings.aliases.as_ref().and_then(|a| a.get(symbol)) {
        return user.clone();
    }
    resolve_builtin(symbol)
}
