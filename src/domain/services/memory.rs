#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

use crate::domain::models::Exchange;
use crate::domain::models::History;

/// Rebuilds the bounded conversation context from scratch on every turn.
pub struct MemoryWindow {}

impl MemoryWindow {
    /// Returns the last `size` exchanges of `history` in chronological order,
    /// or all of them when the history is shorter. Borrows straight from the
    /// history, callers get a view rather than a copy.
    pub fn build(history: &History, size: usize) -> &[Exchange] {
        let exchanges = history.exchanges();
        let start = exchanges.len().saturating_sub(size);
        return &exchanges[start..];
    }
}
