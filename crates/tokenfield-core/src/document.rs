#![forbid(unsafe_code)]

//! Single-line document model: text segments and atomic variable chips.
//!
//! A [`Document`] is one line of content. It never contains line breaks as
//! structure; paste and insert operations that carry breaks are folded back
//! into a single line by [`Document::merge_lines`].
//!
//! # Atom positions
//!
//! Cursor positions index the document's *atom* sequence. Every grapheme
//! cluster of text is one atom, and every chip is one atom, regardless of how
//! long its name is:
//!
//! ```text
//!   c   p   ␣  [file]  ␣   /   t   m   p
//! 0   1   2   3      4   5   6   7   8   9
//! ```
//!
//! Arrow keys step over a chip in a single keystroke, backspace removes it
//! whole, and a selection edge can never land inside one. All position math
//! in this module (and everything built on it) speaks atoms, never bytes.
//!
//! # Canonical shape
//!
//! The segment list always starts and ends with a text segment, and two
//! segments of the same kind are never adjacent. Empty text segments pad the
//! gaps around chips, including between two back-to-back chips. They occupy
//! zero atoms, so the padding is invisible to position math; it exists so a
//! caret can always sit on either side of a chip inside a text segment.
//! Every constructor and edit operation re-establishes this shape.

use unicode_segmentation::UnicodeSegmentation;

// --- Segments ---

/// One run of content in a document: plain text or a variable chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A run of plain text. May be empty.
    Text(String),

    /// A variable chip. Rendered from its name, edited as one unit.
    Variable {
        /// The variable name, without `${}` wrapping.
        name: String,
    },
}

impl Segment {
    /// Create a text segment.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a variable chip segment.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// The kind tag for this segment.
    #[must_use]
    pub const fn kind(&self) -> SegmentKind {
        match self {
            Self::Text(_) => SegmentKind::Text,
            Self::Variable { .. } => SegmentKind::Variable,
        }
    }

    /// The text content, if this is a text segment.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Variable { .. } => None,
        }
    }

    /// The variable name, if this is a chip.
    #[must_use]
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Variable { name } => Some(name),
        }
    }

    /// Number of cursor positions this segment occupies.
    ///
    /// Text contributes one atom per grapheme cluster; a chip contributes
    /// exactly one no matter how long its name is.
    #[must_use]
    pub fn atom_len(&self) -> usize {
        match self {
            Self::Text(text) => text.graphemes(true).count(),
            Self::Variable { .. } => 1,
        }
    }
}

/// Segment kind tag, with the capability predicates hosts render by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Plain text.
    Text,
    /// Variable chip.
    Variable,
}

impl SegmentKind {
    /// Whether this kind participates in the inline flow of the line.
    ///
    /// Every kind does; the document has no block segments. Hosts embedding
    /// segments in a block-structured editor model must register both kinds
    /// as inline rather than letting chips default to block elements.
    #[must_use]
    pub const fn is_inline(self) -> bool {
        match self {
            Self::Text | Self::Variable => true,
        }
    }

    /// Whether this kind is one indivisible unit: entered, traversed, and
    /// deleted whole, with no cursor positions inside it.
    #[must_use]
    pub const fn is_atomic(self) -> bool {
        matches!(self, Self::Variable)
    }
}

// --- Positions and selections ---

/// A half-open range of atom positions, `start..end`.
///
/// Constructors take `start <= end`; use [`Selection::span`] to order a
/// user-dragged range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First position in the range.
    pub start: usize,
    /// One past the last position in the range.
    pub end: usize,
}

impl Span {
    /// Create a span from ordered endpoints.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span at one position.
    #[must_use]
    pub const fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Number of atoms covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no atoms.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a position falls inside the span.
    #[must_use]
    pub const fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }
}

/// A selection: an anchor (where the drag started) and a head (where the
/// cursor is now). `anchor > head` means the user selected backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The fixed end of the selection.
    pub anchor: usize,
    /// The moving end; this is where the caret renders.
    pub head: usize,
}

impl Selection {
    /// Create a selection between two positions.
    #[must_use]
    pub const fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// A collapsed selection (a plain caret) at one position.
    #[must_use]
    pub const fn caret(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Whether anchor and head coincide.
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    /// The selected range in document order, regardless of drag direction.
    #[must_use]
    pub const fn span(&self) -> Span {
        if self.anchor <= self.head {
            Span::new(self.anchor, self.head)
        } else {
            Span::new(self.head, self.anchor)
        }
    }
}

// --- Document ---

/// One line of text segments and variable chips, in canonical shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    segments: Vec<Segment>,
}

impl Document {
    /// An empty document: a single empty text segment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: vec![Segment::text("")],
        }
    }

    /// Build a document from segments, normalizing into canonical shape.
    ///
    /// Adjacent text segments are merged and empty text padding is inserted
    /// so the result starts and ends with text and alternates kinds. Text
    /// content is taken as-is; this constructor does not strip line breaks.
    #[must_use]
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut out: Vec<Segment> = Vec::new();
        for seg in segments {
            match seg {
                Segment::Text(text) => match out.last_mut() {
                    Some(Segment::Text(prev)) => prev.push_str(&text),
                    _ => out.push(Segment::Text(text)),
                },
                chip @ Segment::Variable { .. } => {
                    if !matches!(out.last(), Some(Segment::Text(_))) {
                        out.push(Segment::text(""));
                    }
                    out.push(chip);
                }
            }
        }
        if !matches!(out.last(), Some(Segment::Text(_))) {
            out.push(Segment::text(""));
        }
        Self { segments: out }
    }

    /// Fold would-be lines into one.
    ///
    /// The document is single-line by construction. Any operation that would
    /// produce multiple lines routes through here instead: the lines'
    /// segments are concatenated in order and the breaks between them simply
    /// vanish. An empty iterator yields the empty document.
    #[must_use]
    pub fn merge_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = Vec<Segment>>,
    {
        Self::from_segments(lines.into_iter().flatten())
    }

    /// The segment list, in canonical shape.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the chips in the document, in order, duplicates included.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::variable_name)
    }

    /// Total number of atoms (valid cursor positions run `0..=atom_len`).
    #[must_use]
    pub fn atom_len(&self) -> usize {
        self.segments.iter().map(Segment::atom_len).sum()
    }

    /// Whether the document has no content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atom_len() == 0
    }

    /// The position one atom before `pos`, if any.
    #[must_use]
    pub fn position_before(&self, pos: usize) -> Option<usize> {
        let pos = pos.min(self.atom_len());
        pos.checked_sub(1)
    }

    /// The position one atom after `pos`, if any.
    #[must_use]
    pub fn position_after(&self, pos: usize) -> Option<usize> {
        if pos < self.atom_len() {
            Some(pos + 1)
        } else {
            None
        }
    }

    /// The start of the word unit ending at or before `pos`.
    ///
    /// Returns `None` at the document start. A chip is a word unit of its
    /// own: scanning never crosses one, and a chip immediately before the
    /// scan is itself the previous word.
    #[must_use]
    pub fn word_start_before(&self, pos: usize) -> Option<usize> {
        let pos = pos.min(self.atom_len());
        if pos == 0 {
            return None;
        }
        let atoms = self.atoms();
        if matches!(atoms[pos - 1], Atom::Chip) {
            return Some(pos - 1);
        }
        let mut i = pos;
        // 1. Skip separators (whitespace + punctuation), stopping at chips.
        while i > 0 {
            match atoms[i - 1] {
                Atom::Grapheme(g) if grapheme_class(g) != 1 => i -= 1,
                _ => break,
            }
        }
        // A separator run that ends at a chip crosses the chip as one unit.
        if i > 0 && matches!(atoms[i - 1], Atom::Chip) {
            return Some(i - 1);
        }
        // 2. Skip the previous word.
        while i > 0 {
            match atoms[i - 1] {
                Atom::Grapheme(g) if grapheme_class(g) == 1 => i -= 1,
                _ => break,
            }
        }
        Some(i)
    }

    /// The boundary one word unit after `pos`.
    ///
    /// Returns `None` at the document end. Mirrors [`word_start_before`]:
    /// skip the current word if inside one, then separators, landing at the
    /// next word start. Chips are crossed one at a time.
    ///
    /// [`word_start_before`]: Self::word_start_before
    #[must_use]
    pub fn word_boundary_after(&self, pos: usize) -> Option<usize> {
        let len = self.atom_len();
        let pos = pos.min(len);
        if pos >= len {
            return None;
        }
        let atoms = self.atoms();
        if matches!(atoms[pos], Atom::Chip) {
            return Some(pos + 1);
        }
        let mut i = pos;
        // 1. Skip the current word if we're inside one.
        while i < len {
            match atoms[i] {
                Atom::Grapheme(g) if grapheme_class(g) == 1 => i += 1,
                _ => break,
            }
        }
        // 2. Skip separators (whitespace + punctuation), stopping at chips.
        while i < len {
            match atoms[i] {
                Atom::Grapheme(g) if grapheme_class(g) != 1 => i += 1,
                _ => break,
            }
        }
        Some(i)
    }

    /// The text content of a span, chips excluded.
    ///
    /// A chip inside the span advances the position count but contributes no
    /// characters, the same way it renders as something other than text.
    #[must_use]
    pub fn text_between(&self, span: Span) -> String {
        let mut out = String::new();
        let mut idx = 0;
        for seg in &self.segments {
            if idx >= span.end {
                break;
            }
            match seg {
                Segment::Text(text) => {
                    for g in text.graphemes(true) {
                        if idx >= span.end {
                            break;
                        }
                        if idx >= span.start {
                            out.push_str(g);
                        }
                        idx += 1;
                    }
                }
                Segment::Variable { .. } => idx += 1,
            }
        }
        out
    }

    /// Insert text at a position and return the number of atoms added.
    ///
    /// Line breaks in `text` (`\r\n`, `\n`, `\r`) split it into would-be
    /// lines which [`merge_lines`] folds straight back together, so the
    /// surrounding content joins up and the breaks vanish. Other control
    /// characters are dropped; tab is kept. The atom count can grow by less
    /// than the number of graphemes inserted when an inserted combining mark
    /// merges into a neighboring cluster.
    ///
    /// [`merge_lines`]: Self::merge_lines
    pub fn insert_text(&mut self, pos: usize, text: &str) -> usize {
        let pieces = split_insert_lines(text);
        #[cfg(feature = "tracing")]
        if pieces.len() > 1 {
            tracing::debug!(pieces = pieces.len(), "folding multi-line insert into one line");
        }
        let before = self.atom_len();
        let (left, right) = split_segments(&self.segments, pos);
        let mut head = Some(left);
        let mut tail = Some(right);
        let count = pieces.len();
        let mut lines: Vec<Vec<Segment>> = Vec::with_capacity(count);
        for (i, piece) in pieces.into_iter().enumerate() {
            let mut line = head.take().unwrap_or_default();
            line.push(Segment::Text(piece));
            if i + 1 == count {
                line.extend(tail.take().unwrap_or_default());
            }
            lines.push(line);
        }
        *self = Self::merge_lines(lines);
        self.atom_len().saturating_sub(before)
    }

    /// Insert a chip at a position. The chip occupies one atom.
    pub fn insert_variable(&mut self, pos: usize, name: impl Into<String>) {
        let (left, right) = split_segments(&self.segments, pos);
        let chip = std::iter::once(Segment::variable(name));
        *self = Self::from_segments(left.into_iter().chain(chip).chain(right));
    }

    /// Remove the atoms in a span.
    ///
    /// A chip is either wholly inside the span and removed, or wholly outside
    /// and kept; span edges cannot land inside one.
    pub fn remove_range(&mut self, span: Span) {
        if span.is_empty() {
            return;
        }
        let (left, rest) = split_segments(&self.segments, span.start);
        let (_, right) = split_segments(&rest, span.end.saturating_sub(span.start));
        *self = Self::from_segments(left.into_iter().chain(right));
    }

    /// Replace the atoms in a span with a single chip. The chip lands where
    /// the span began.
    pub fn replace_range_with_variable(&mut self, span: Span, name: impl Into<String>) {
        self.remove_range(span);
        self.insert_variable(span.start, name);
    }

    fn atoms(&self) -> Vec<Atom<'_>> {
        let mut atoms = Vec::new();
        for seg in &self.segments {
            match seg {
                Segment::Text(text) => atoms.extend(text.graphemes(true).map(Atom::Grapheme)),
                Segment::Variable { .. } => atoms.push(Atom::Chip),
            }
        }
        atoms
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// --- Word classification ---

/// Whether a grapheme cluster counts as part of a word.
///
/// Word graphemes are alphanumerics plus underscore, so identifier-style
/// names stay one unit. Everything else separates words.
#[must_use]
pub fn is_word_grapheme(g: &str) -> bool {
    grapheme_class(g) == 1
}

/// 0 = whitespace, 1 = word, 2 = punctuation.
fn grapheme_class(g: &str) -> u8 {
    if g.chars().all(char::is_whitespace) {
        0
    } else if g.chars().any(|c| c.is_alphanumeric() || c == '_') {
        1
    } else {
        2
    }
}

// --- Internal helpers ---

enum Atom<'a> {
    Grapheme(&'a str),
    Chip,
}

/// Split a segment list at an atom position, cutting text segments at
/// grapheme boundaries and never cutting chips.
fn split_segments(segments: &[Segment], pos: usize) -> (Vec<Segment>, Vec<Segment>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut remaining = pos;
    let mut split_done = false;
    for seg in segments {
        if split_done {
            right.push(seg.clone());
            continue;
        }
        let width = seg.atom_len();
        if remaining >= width {
            remaining -= width;
            left.push(seg.clone());
        } else if seg.kind().is_atomic() {
            // The cut lands on an atomic segment; it falls wholly after it.
            right.push(seg.clone());
            split_done = true;
        } else if let Segment::Text(text) = seg {
            let byte = grapheme_byte_offset(text, remaining);
            left.push(Segment::Text(text[..byte].to_string()));
            right.push(Segment::Text(text[byte..].to_string()));
            split_done = true;
        }
    }
    (left, right)
}

fn grapheme_byte_offset(s: &str, grapheme_idx: usize) -> usize {
    s.grapheme_indices(true)
        .nth(grapheme_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Split inserted text at line breaks, dropping other control characters.
/// Always returns at least one piece.
fn split_insert_lines(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => pieces.push(std::mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                pieces.push(std::mem::take(&mut current));
            }
            c if c.is_control() && c != '\t' => {}
            c => current.push(c),
        }
    }
    pieces.push(current);
    pieces
}
