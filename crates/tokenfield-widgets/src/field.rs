#![forbid(unsafe_code)]

//! The token field widget.
//!
//! A single-line field mixing plain text with atomic variable chips, plus an
//! `@`-triggered completion menu over a fixed catalog of variable names.
//! Grapheme-cluster aware for correct Unicode handling; fully headless.
//!
//! The field re-derives its completion session from document and selection
//! after every edit and cursor move. See [`crate::trigger`] for the rules.

use tokenfield_core::catalog::Catalog;
use tokenfield_core::document::{Document, Selection, Span};
use tokenfield_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
use tokenfield_core::template;

use crate::trigger::{self, NavDirection, TriggerSession};
use crate::{EditSurface, Unit};

/// How many candidates the menu shows when no explicit limit is set.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// A single-line token field widget.
#[derive(Debug, Clone)]
pub struct TokenField {
    /// Document content: text segments and chips in canonical shape.
    document: Document,
    /// Cursor position (atom index).
    cursor: usize,
    /// Selection anchor (atom index). When set, selection spans from anchor
    /// to cursor.
    selection_anchor: Option<usize>,
    /// Active completion session, re-derived after every edit and move.
    session: Option<TriggerSession>,
    /// The variable names this field offers.
    catalog: Catalog,
    /// Maximum number of menu candidates.
    limit: usize,
    /// Placeholder text for hosts to render while the field is empty.
    placeholder: String,
}

impl TokenField {
    /// Create an empty field over a catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            document: Document::new(),
            cursor: 0,
            selection_anchor: None,
            session: None,
            catalog,
            limit: DEFAULT_SUGGESTION_LIMIT,
            placeholder: String::new(),
        }
    }

    // --- Builder methods ---

    /// Set the content from a template string (builder).
    ///
    /// The cursor lands at the end. No completion session is derived: the
    /// menu first appears once the user interacts.
    #[must_use]
    pub fn with_template(mut self, template: &str) -> Self {
        self.document = template::decode(template, &self.catalog);
        self.cursor = self.document.atom_len();
        self.selection_anchor = None;
        self.session = None;
        self
    }

    /// Set the maximum number of menu candidates (builder).
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    // --- Content access ---

    /// The current document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The current content in template form, chips encoded as `${name}`.
    #[must_use]
    pub fn template(&self) -> String {
        template::encode(&self.document)
    }

    /// Replace the content from a template string.
    ///
    /// The cursor lands at the end and the session is re-derived, the same
    /// as for any other content change.
    pub fn set_template(&mut self, template: &str) {
        self.document = template::decode(template, &self.catalog);
        self.cursor = self.document.atom_len();
        self.selection_anchor = None;
        self.refresh_session();
    }

    /// Clear all content.
    pub fn clear(&mut self) {
        self.document = Document::new();
        self.cursor = 0;
        self.selection_anchor = None;
        self.refresh_session();
    }

    /// The cursor position (atom index).
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current selection. Collapsed when nothing is selected.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection::new(self.selection_anchor.unwrap_or(self.cursor), self.cursor)
    }

    /// Move the cursor, collapsing any selection, and re-derive the session.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.document.atom_len());
        self.selection_anchor = None;
        self.refresh_session();
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether the field has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// The catalog this field completes against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The maximum number of menu candidates.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    // --- Completion menu ---

    /// The active completion session, if any.
    ///
    /// A session can exist with an empty candidate list; the menu is only
    /// considered visible when [`menu_active`] also holds.
    ///
    /// [`menu_active`]: Self::menu_active
    pub fn session(&self) -> Option<&TriggerSession> {
        self.session.as_ref()
    }

    /// The filtered menu candidates, in catalog order.
    #[must_use]
    pub fn suggestions(&self) -> Vec<&str> {
        match &self.session {
            Some(session) => self.catalog.filter_prefix(&session.prefix, self.limit),
            None => Vec::new(),
        }
    }

    /// Index of the highlighted candidate while the menu is visible.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        if self.menu_active() {
            self.session.as_ref().map(|s| s.highlighted)
        } else {
            None
        }
    }

    /// Whether the menu is visible: an active session with candidates.
    #[must_use]
    pub fn menu_active(&self) -> bool {
        self.session.is_some() && !self.suggestions().is_empty()
    }

    /// Move the highlight through the candidate list, wrapping at the ends.
    pub fn navigate(&mut self, direction: NavDirection) {
        let count = self.suggestions().len();
        if count == 0 {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.highlighted = match direction {
            NavDirection::Next => {
                if session.highlighted + 1 >= count {
                    0
                } else {
                    session.highlighted + 1
                }
            }
            NavDirection::Previous => {
                if session.highlighted == 0 {
                    count - 1
                } else {
                    session.highlighted - 1
                }
            }
        };
    }

    /// Commit the candidate at `index`: the whole trigger run, `@` included,
    /// is replaced by a chip and the cursor lands after it.
    ///
    /// No-op without a session or when `index` is out of range.
    pub fn commit(&mut self, index: usize) {
        let Some(anchor) = self.session.as_ref().map(|s| s.anchor) else {
            return;
        };
        let name = match self.suggestions().get(index) {
            Some(name) => (*name).to_string(),
            None => return,
        };
        self.select(anchor);
        self.insert_variable(&name);
    }

    /// Commit the highlighted candidate.
    pub fn commit_highlighted(&mut self) {
        if let Some(index) = self.session.as_ref().map(|s| s.highlighted) {
            self.commit(index);
        }
    }

    /// Dismiss the session until the next edit or cursor move re-derives it.
    ///
    /// Returns `true` if a session was active.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.session.take().is_some();
        #[cfg(feature = "tracing")]
        if cancelled {
            tracing::debug!("completion session cancelled");
        }
        cancelled
    }

    // --- Event handling ---

    /// Handle an input event.
    ///
    /// Returns `true` if the field consumed the event; the host should then
    /// suppress its own binding for it. While the menu is visible, Down, Up,
    /// Tab, Enter, and Escape drive the menu. Otherwise those keys report
    /// `false` so hosts keep their usual meaning for them (Tab moves focus,
    /// Enter submits); a single-line field has no use of its own for them.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let changed = match event {
            Event::Key(key)
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat =>
            {
                self.handle_key(key)
            }
            Event::Paste(paste) => {
                self.insert_text(&paste.text);
                true
            }
            _ => false,
        };

        #[cfg(feature = "tracing")]
        if changed {
            self.trace_edit(Self::event_operation_name(event));
        }

        changed
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.menu_active() {
            match key.code {
                KeyCode::Down => {
                    self.navigate(NavDirection::Next);
                    return true;
                }
                KeyCode::Up => {
                    self.navigate(NavDirection::Previous);
                    return true;
                }
                KeyCode::Tab | KeyCode::Enter => {
                    self.commit_highlighted();
                    return true;
                }
                KeyCode::Escape => {
                    self.cancel();
                    return true;
                }
                _ => {}
            }
        }

        let ctrl = key.modifiers.contains(Modifiers::CTRL);
        let shift = key.modifiers.contains(Modifiers::SHIFT);

        match key.code {
            KeyCode::Char(c) if !ctrl => {
                self.insert_char(c);
                true
            }
            // Ctrl+A: select all
            KeyCode::Char('a') if ctrl => {
                self.select_all();
                true
            }
            // Ctrl+W: delete word back
            KeyCode::Char('w') if ctrl => {
                self.delete_backward(true);
                true
            }
            KeyCode::Backspace => {
                self.delete_backward(ctrl);
                true
            }
            KeyCode::Delete => {
                self.delete_forward(ctrl);
                true
            }
            KeyCode::Left => {
                if ctrl {
                    self.move_cursor_word_left(shift);
                } else {
                    self.move_cursor_left(shift);
                }
                true
            }
            KeyCode::Right => {
                if ctrl {
                    self.move_cursor_word_right(shift);
                } else {
                    self.move_cursor_right(shift);
                }
                true
            }
            KeyCode::Home => {
                self.move_cursor_home(shift);
                true
            }
            KeyCode::End => {
                self.move_cursor_end(shift);
                true
            }
            _ => false,
        }
    }

    #[cfg(feature = "tracing")]
    fn trace_edit(&self, operation: &'static str) {
        let _span = tracing::debug_span!(
            "field.edit",
            operation,
            cursor_position = self.cursor,
            atom_count = self.document.atom_len(),
            has_selection = self.selection_anchor.is_some(),
            menu_active = self.menu_active()
        )
        .entered();
    }

    #[cfg(feature = "tracing")]
    fn event_operation_name(event: &Event) -> &'static str {
        match event {
            Event::Key(key) => Self::key_operation_name(key),
            Event::Paste(_) => "paste",
        }
    }

    #[cfg(feature = "tracing")]
    fn key_operation_name(key: &KeyEvent) -> &'static str {
        let ctrl = key.modifiers.contains(Modifiers::CTRL);
        let shift = key.modifiers.contains(Modifiers::SHIFT);

        // Down/Up/Tab/Enter/Escape only report a change via the menu path,
        // so their names are unconditional here.
        match key.code {
            KeyCode::Down => "menu_next",
            KeyCode::Up => "menu_previous",
            KeyCode::Tab | KeyCode::Enter => "menu_commit",
            KeyCode::Escape => "menu_cancel",
            KeyCode::Char('a') if ctrl => "select_all",
            KeyCode::Char('w') if ctrl => "delete_word_back",
            KeyCode::Char(_) if !ctrl => "insert_char",
            KeyCode::Backspace if ctrl => "delete_word_back",
            KeyCode::Backspace => "delete_back",
            KeyCode::Delete if ctrl => "delete_word_forward",
            KeyCode::Delete => "delete_forward",
            KeyCode::Left if ctrl && shift => "move_word_left_select",
            KeyCode::Left if ctrl => "move_word_left",
            KeyCode::Left if shift => "move_left_select",
            KeyCode::Left => "move_left",
            KeyCode::Right if ctrl && shift => "move_word_right_select",
            KeyCode::Right if ctrl => "move_word_right",
            KeyCode::Right if shift => "move_right_select",
            KeyCode::Right => "move_right",
            KeyCode::Home if shift => "move_home_select",
            KeyCode::Home => "move_home",
            KeyCode::End if shift => "move_end_select",
            KeyCode::End => "move_end",
            _ => "key_other",
        }
    }

    // --- Editing operations ---

    /// Insert a character at the cursor, replacing any selection.
    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_text(c.encode_utf8(&mut buf));
    }

    /// Insert text at the cursor, replacing any selection.
    ///
    /// Line breaks in `text` fold the surrounding content together instead
    /// of splitting the line; other control characters are dropped.
    pub fn insert_text(&mut self, text: &str) {
        self.delete_selection();
        let added = self.document.insert_text(self.cursor, text);
        self.cursor = (self.cursor + added).min(self.document.atom_len());
        self.refresh_session();
    }

    /// Select the whole document.
    pub fn select_all(&mut self) {
        self.selection_anchor = Some(0);
        self.cursor = self.document.atom_len();
        self.refresh_session();
    }

    /// Delete selected content. No-op if no selection.
    fn delete_selection(&mut self) {
        if let Some(anchor) = self.selection_anchor.take() {
            let span = Selection::new(anchor, self.cursor).span();
            self.document.remove_range(span);
            self.cursor = span.start;
        }
    }

    fn delete_backward(&mut self, word: bool) {
        if self.selection_anchor.is_some() {
            self.delete_selection();
        } else if word {
            if let Some(start) = self.document.word_start_before(self.cursor) {
                self.document.remove_range(Span::new(start, self.cursor));
                self.cursor = start;
            }
        } else if let Some(prev) = self.document.position_before(self.cursor) {
            self.document.remove_range(Span::new(prev, self.cursor));
            self.cursor = prev;
        }
        self.refresh_session();
    }

    fn delete_forward(&mut self, word: bool) {
        if self.selection_anchor.is_some() {
            self.delete_selection();
        } else if word {
            if let Some(end) = self.document.word_boundary_after(self.cursor) {
                self.document.remove_range(Span::new(self.cursor, end));
            }
        } else if let Some(next) = self.document.position_after(self.cursor) {
            self.document.remove_range(Span::new(self.cursor, next));
        }
        self.refresh_session();
    }

    fn ensure_selection_anchor(&mut self) {
        if self.selection_anchor.is_none() {
            self.selection_anchor = Some(self.cursor);
        }
    }

    // --- Cursor movement ---

    fn move_cursor_left(&mut self, select: bool) {
        if select {
            self.ensure_selection_anchor();
            if let Some(prev) = self.document.position_before(self.cursor) {
                self.cursor = prev;
            }
        } else if let Some(anchor) = self.selection_anchor.take() {
            // Collapse to the left edge of the selection.
            self.cursor = self.cursor.min(anchor);
        } else if let Some(prev) = self.document.position_before(self.cursor) {
            self.cursor = prev;
        }
        self.refresh_session();
    }

    fn move_cursor_right(&mut self, select: bool) {
        if select {
            self.ensure_selection_anchor();
            if let Some(next) = self.document.position_after(self.cursor) {
                self.cursor = next;
            }
        } else if let Some(anchor) = self.selection_anchor.take() {
            // Collapse to the right edge of the selection.
            self.cursor = self.cursor.max(anchor);
        } else if let Some(next) = self.document.position_after(self.cursor) {
            self.cursor = next;
        }
        self.refresh_session();
    }

    fn move_cursor_word_left(&mut self, select: bool) {
        if select {
            self.ensure_selection_anchor();
        } else {
            self.selection_anchor = None;
        }
        if let Some(pos) = self.document.word_start_before(self.cursor) {
            self.cursor = pos;
        }
        self.refresh_session();
    }

    fn move_cursor_word_right(&mut self, select: bool) {
        if select {
            self.ensure_selection_anchor();
        } else {
            self.selection_anchor = None;
        }
        if let Some(pos) = self.document.word_boundary_after(self.cursor) {
            self.cursor = pos;
        }
        self.refresh_session();
    }

    fn move_cursor_home(&mut self, select: bool) {
        if select {
            self.ensure_selection_anchor();
        } else {
            self.selection_anchor = None;
        }
        self.cursor = 0;
        self.refresh_session();
    }

    fn move_cursor_end(&mut self, select: bool) {
        if select {
            self.ensure_selection_anchor();
        } else {
            self.selection_anchor = None;
        }
        self.cursor = self.document.atom_len();
        self.refresh_session();
    }

    // --- Session upkeep ---

    /// Re-derive the completion session from document and selection.
    fn refresh_session(&mut self) {
        let next = trigger::detect(self);
        #[cfg(feature = "tracing")]
        match (&self.session, &next) {
            (None, Some(opened)) => {
                tracing::debug!(prefix = %opened.prefix, "completion session opened");
            }
            (Some(_), None) => tracing::debug!("completion session closed"),
            _ => {}
        }
        self.session = next;
    }
}

impl Default for TokenField {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl EditSurface for TokenField {
    fn selection(&self) -> Option<Selection> {
        Some(TokenField::selection(self))
    }

    fn position_before(&self, pos: usize, unit: Unit) -> Option<usize> {
        match unit {
            Unit::Character => self.document.position_before(pos),
            Unit::Word => self.document.word_start_before(pos),
        }
    }

    fn position_after(&self, pos: usize, unit: Unit) -> Option<usize> {
        match unit {
            Unit::Character => self.document.position_after(pos),
            Unit::Word => self.document.word_boundary_after(pos),
        }
    }

    fn text_between(&self, span: Span) -> String {
        self.document.text_between(span)
    }

    fn select(&mut self, span: Span) {
        let len = self.document.atom_len();
        self.selection_anchor = Some(span.start.min(len));
        self.cursor = span.end.min(len);
        self.refresh_session();
    }

    fn insert_variable(&mut self, name: &str) {
        self.delete_selection();
        self.document.insert_variable(self.cursor, name);
        self.cursor = (self.cursor + 1).min(self.document.atom_len());
        self.refresh_session();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> TokenField {
        TokenField::new(Catalog::new(["userName", "userId", "email"]))
    }

    fn type_str(f: &mut TokenField, s: &str) {
        for c in s.chars() {
            f.insert_char(c);
        }
    }

    #[test]
    fn test_new_field_is_empty() {
        let f = field();
        assert!(f.is_empty());
        assert_eq!(f.cursor(), 0);
        assert_eq!(f.template(), "");
        assert!(f.session().is_none());
        assert_eq!(f.limit(), DEFAULT_SUGGESTION_LIMIT);
    }

    #[test]
    fn test_with_template_places_cursor_at_end() {
        let f = field().with_template("hi ${userName}!");
        assert_eq!(f.cursor(), 5);
        assert_eq!(f.template(), "hi ${userName}!");
    }

    #[test]
    fn test_with_template_derives_no_initial_session() {
        // Even when the template text ends in a trigger run, the menu waits
        // for the first interaction.
        let f = field().with_template("hi @user");
        assert!(f.session().is_none());
        assert!(!f.menu_active());
    }

    #[test]
    fn test_set_template_rederives_session() {
        let mut f = field();
        f.set_template("hi @user");
        assert!(f.session().is_some());
        assert_eq!(f.suggestions(), ["userName", "userId"]);
    }

    #[test]
    fn test_builders() {
        let f = field().with_limit(3).with_placeholder("type here");
        assert_eq!(f.limit(), 3);
        assert_eq!(f.placeholder(), "type here");
    }

    #[test]
    fn test_insert_char_advances_cursor() {
        let mut f = field();
        f.insert_char('a');
        f.insert_char('b');
        assert_eq!(f.template(), "ab");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn test_typing_trigger_opens_session() {
        let mut f = field();
        type_str(&mut f, "hi @use");
        let session = f.session().unwrap();
        assert_eq!(session.prefix, "use");
        assert_eq!(session.anchor, Span::new(3, 7));
        assert!(f.menu_active());
    }

    #[test]
    fn test_session_with_no_candidates_hides_menu() {
        let mut f = field();
        type_str(&mut f, "@zzz");
        assert!(f.session().is_some());
        assert!(f.suggestions().is_empty());
        assert!(!f.menu_active());
        assert_eq!(f.highlighted(), None);
    }

    #[test]
    fn test_navigate_wraps_both_ways() {
        let mut f = field();
        type_str(&mut f, "@user");
        assert_eq!(f.suggestions(), ["userName", "userId"]);
        assert_eq!(f.highlighted(), Some(0));

        f.navigate(NavDirection::Next);
        assert_eq!(f.highlighted(), Some(1));
        f.navigate(NavDirection::Next);
        assert_eq!(f.highlighted(), Some(0));
        f.navigate(NavDirection::Previous);
        assert_eq!(f.highlighted(), Some(1));
        f.navigate(NavDirection::Previous);
        assert_eq!(f.highlighted(), Some(0));
    }

    #[test]
    fn test_navigate_without_session_is_noop() {
        let mut f = field();
        f.navigate(NavDirection::Next);
        assert!(f.session().is_none());
    }

    #[test]
    fn test_highlight_resets_on_edit() {
        let mut f = field();
        type_str(&mut f, "@use");
        f.navigate(NavDirection::Next);
        assert_eq!(f.highlighted(), Some(1));
        f.insert_char('r');
        assert_eq!(f.highlighted(), Some(0));
    }

    #[test]
    fn test_commit_replaces_run_with_chip() {
        let mut f = field();
        type_str(&mut f, "hi @userI");
        f.commit(0);
        assert_eq!(f.template(), "hi ${userId}");
        // Cursor sits right after the chip.
        assert_eq!(f.cursor(), 4);
        assert!(f.session().is_none());
    }

    #[test]
    fn test_commit_out_of_range_is_noop() {
        let mut f = field();
        type_str(&mut f, "@use");
        f.commit(99);
        assert_eq!(f.template(), "@use");
        assert!(f.session().is_some());
    }

    #[test]
    fn test_commit_without_session_is_noop() {
        let mut f = field();
        type_str(&mut f, "plain");
        f.commit(0);
        assert_eq!(f.template(), "plain");
    }

    #[test]
    fn test_cancel_lasts_one_interval() {
        let mut f = field();
        type_str(&mut f, "@use");
        assert!(f.cancel());
        assert!(f.session().is_none());
        assert!(!f.cancel());

        // The next edit re-derives the session.
        f.insert_char('r');
        assert!(f.session().is_some());
        assert_eq!(f.session().unwrap().prefix, "user");
    }

    #[test]
    fn test_selection_collapse_edges() {
        let mut f = field().with_template("abcd");
        f.move_cursor_left(true);
        f.move_cursor_left(true);
        assert_eq!(f.selection(), Selection::new(4, 2));

        // Plain left collapses to the left edge.
        f.move_cursor_left(false);
        assert_eq!(f.cursor(), 2);
        assert!(f.selection().is_collapsed());

        f.move_cursor_right(true);
        assert_eq!(f.selection(), Selection::new(2, 3));
        // Plain right collapses to the right edge.
        f.move_cursor_right(false);
        assert_eq!(f.cursor(), 3);
        assert!(f.selection().is_collapsed());
    }

    #[test]
    fn test_select_all_then_insert_replaces() {
        let mut f = field().with_template("old ${userId} text");
        f.select_all();
        f.insert_char('x');
        assert_eq!(f.template(), "x");
        assert_eq!(f.cursor(), 1);
    }

    #[test]
    fn test_delete_backward_word() {
        let mut f = field().with_template("one two");
        f.delete_backward(true);
        assert_eq!(f.template(), "one ");
        f.delete_backward(true);
        assert_eq!(f.template(), "");
    }

    #[test]
    fn test_delete_selection_via_backspace() {
        let mut f = field().with_template("abcd");
        f.move_cursor_left(true);
        f.move_cursor_left(true);
        f.delete_backward(false);
        assert_eq!(f.template(), "ab");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn test_chip_deletes_whole() {
        let mut f = field().with_template("a ${userId} b");
        // Place the cursor right after the chip.
        f.set_cursor(3);
        f.delete_backward(false);
        assert_eq!(f.template(), "a  b");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn test_delete_forward_removes_chip_whole() {
        let mut f = field().with_template("a ${userId} b");
        f.set_cursor(2);
        f.delete_forward(false);
        assert_eq!(f.template(), "a  b");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn test_set_cursor_into_trigger_zone_opens_session() {
        let mut f = field().with_template("hi @user tail");
        assert!(f.session().is_none());
        f.set_cursor(8);
        assert!(f.session().is_some());
        assert_eq!(f.session().unwrap().prefix, "user");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut f = field().with_template("hi ${userId}");
        type_str(&mut f, " @use");
        assert!(f.session().is_some());
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.cursor(), 0);
        assert!(f.session().is_none());
    }

    #[test]
    fn test_default_field() {
        let f = TokenField::default();
        assert!(f.catalog().is_empty());
        assert_eq!(f.limit(), DEFAULT_SUGGESTION_LIMIT);
    }
}
