#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spanned<T> {
    pub item: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(item: T, span: Span) -> Self {
        Self { item, span }
    }
}

/// Byte offsets into the script source, `end` exclusive.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, PartialEq)]
pub struct SpanSnippet {
    pub line: usize,
    pub column: usize,
    pub source_line: String,
}

/// Finds the line holding the start of `span`. Line and column are 1-based.
pub fn span_snippet(source: &str, span: Span) -> Option<SpanSnippet> {
    let mut offset = 0;

    for (idx, line) in source.split_inclusive('\n').enumerate() {
        let line_start = offset;
        let line_end = offset + line.len();

        if span.start >= line_start && span.start < line_end {
            let column = source[line_start..span.start].chars().count() + 1;

            return Some(SpanSnippet {
                line: idx + 1,
                column,
                source_line: line.trim_end_matches(['\r', '\n']).to_string(),
            });
        }

        offset = line_end;
    }

    None
}
