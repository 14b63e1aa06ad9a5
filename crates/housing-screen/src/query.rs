//! Filter box state — the keyword the user types on the details view.
//!
//! # Editing
//!
//! - [`QueryInput::insert`] inserts at the cursor.
//! - [`QueryInput::backspace`] deletes the character before the cursor.
//! - [`QueryInput::set`] / [`QueryInput::clear`] replace the whole query.
//!
//! Each edit returns a [`QueryEdit`] carrying the query before and after, so
//! the reducer can pick between a narrowing and a fresh search.

use housing_core::SearchMode;

/// The query text before and after one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEdit {
    pub prev: String,
    pub next: String,
}

impl QueryEdit {
    pub fn mode(&self) -> SearchMode {
        SearchMode::for_transition(&self.prev, &self.next)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    /// The keyword typed by the user.
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
}

impl QueryInput {
    pub fn insert(&mut self, c: char) -> QueryEdit {
        let prev = self.query.clone();
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        tracing::debug!(query = %self.query, cursor = self.cursor, "query: char inserted");
        self.edit(prev)
    }

    pub fn backspace(&mut self) -> QueryEdit {
        let prev = self.query.clone();
        if self.cursor > 0 {
            // Walk back one char boundary
            let at = self.prev_boundary();
            self.query.remove(at);
            self.cursor = at;
            tracing::debug!(query = %self.query, cursor = self.cursor, "query: backspace");
        }
        self.edit(prev)
    }

    /// Replace the whole query, leaving the cursor at the end.
    pub fn set(&mut self, text: &str) -> QueryEdit {
        let prev = std::mem::replace(&mut self.query, text.to_string());
        self.cursor = self.query.len();
        self.edit(prev)
    }

    pub fn clear(&mut self) -> QueryEdit {
        self.set("")
    }

    fn prev_boundary(&self) -> usize {
        self.query[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn edit(&self, prev: String) -> QueryEdit {
        QueryEdit { prev, next: self.query.clone() }
    }
}
