//! Statement model passed between the parser adapters and the ordering core.

/// Byte range `[start, end)` into the whole component file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, other: &Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// Syntactic shape of a top-level statement, reduced to what ordering needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementShape {
    Import,
    /// `callee(...)` as a statement, or `const x = callee(...)` when `declared`.
    Call { callee: String, declared: bool },
    /// `function f() {}` or `const f = () => {}`.
    Function,
    Other,
}

/// A top-level statement as produced by the script parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub shape: StatementShape,
    pub span: Span,
}

impl Statement {
    pub fn new(shape: StatementShape, start: usize, end: usize) -> Self {
        Self {
            shape,
            span: Span::new(start, end),
        }
    }

    pub fn is_import(&self) -> bool {
        matches!(self.shape, StatementShape::Import)
    }
}

/// A statement that survived scope extraction.
///
/// `text` is what gets moved around: the statement's own source plus any
/// comment attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupStatement {
    pub shape: StatementShape,
    pub span: Span,
    pub index: usize,
    pub text: String,
}

/// A setup statement annotated with its section and sort keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedStatement<'a> {
    pub node: &'a SetupStatement,
    pub section: String,
    pub sub_priority: Option<i64>,
    pub original_index: usize,
}

/// Maximal run of sorted statements sharing one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub section: String,
    pub members: Vec<ClassifiedStatement<'a>>,
}
