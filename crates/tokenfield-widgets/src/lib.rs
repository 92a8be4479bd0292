#![forbid(unsafe_code)]

//! The token field widget: a single-line editor mixing plain text with
//! atomic variable chips, plus an `@`-triggered completion menu.
//!
//! The widget is headless. It owns document, cursor, selection, and
//! completion state, and tells the host whether each key was consumed;
//! drawing the line and the menu is the host's job.
//!
//! ```
//! use tokenfield_core::{Catalog, Event, KeyCode, KeyEvent};
//! use tokenfield_widgets::TokenField;
//!
//! let catalog = Catalog::new(["user", "host"]);
//! let mut field = TokenField::new(catalog).with_template("ssh ");
//!
//! for c in "@ho".chars() {
//!     field.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char(c))));
//! }
//! assert_eq!(field.suggestions(), ["host"]);
//!
//! // Enter replaces the "@ho" run with a chip.
//! field.handle_event(&Event::Key(KeyEvent::new(KeyCode::Enter)));
//! assert_eq!(field.template(), "ssh ${host}");
//! ```

pub mod field;
pub mod trigger;

use tokenfield_core::document::{Selection, Span};

pub use field::{DEFAULT_SUGGESTION_LIMIT, TokenField};
pub use trigger::{NavDirection, TriggerSession};

/// Granularity of a position query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// One atom: a grapheme cluster or a whole chip.
    Character,
    /// One word unit. Chips count as words of their own.
    Word,
}

/// The editing surface the trigger state machine reads and the commit path
/// writes. [`TokenField`] implements it over its own document; embedders
/// with richer editor models can implement it to reuse [`trigger::detect`].
///
/// Contract notes:
///
/// - Positions are atom indices; [`text_between`] skips chips, so a chip
///   inside the queried span contributes a position but no characters.
/// - [`insert_variable`] replaces the current selection with one chip and
///   leaves the cursor immediately after it.
///
/// [`text_between`]: EditSurface::text_between
/// [`insert_variable`]: EditSurface::insert_variable
pub trait EditSurface {
    /// The current selection, if the surface has one.
    fn selection(&self) -> Option<Selection>;

    /// The position one unit before `pos`, if any.
    fn position_before(&self, pos: usize, unit: Unit) -> Option<usize>;

    /// The position one unit after `pos`, if any.
    fn position_after(&self, pos: usize, unit: Unit) -> Option<usize>;

    /// The text content of a span, chips excluded.
    fn text_between(&self, span: Span) -> String;

    /// Replace the selection with the given span.
    fn select(&mut self, span: Span);

    /// Replace the current selection with a chip, cursor after it.
    fn insert_variable(&mut self, name: &str);
}
