use serde::Serialize;

use crate::check::CheckResult;

/// Append-only log of checked passwords, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultList {
    entries: Vec<CheckResult>,
}

impl ResultList {
    /// Appends `result` and hands back the stored entry.
    pub(crate) fn push(&mut self, result: CheckResult) -> &CheckResult {
        let index = self.entries.len();
        self.entries.push(result);
        &self.entries[index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CheckResult> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&CheckResult> {
        self.entries.last()
    }

    /// Scans the whole list on every call.
    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|r| r.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.entries.iter().filter(|r| !r.is_valid()).count()
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a CheckResult;
    type IntoIter = std::slice::Iter<'a, CheckResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
