//! Query forms for the novelty tool pages. All four tools take a pair of
//! names; blank fields simply render the page without a result.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct PairForm {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub second: String,
}

impl PairForm {
    /// Returns the trimmed pair when both fields are filled in.
    pub fn names(&self) -> Option<(&str, &str)> {
        let first = self.first.trim();
        let second = self.second.trim();
        if first.is_empty() || second.is_empty() {
            None
        } else {
            Some((first, second))
        }
    }
}
