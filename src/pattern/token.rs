//! Pattern tokenizer - grammar recognition, no regex emission.

/// One segment of a tokenized path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied into the output regex unchanged.
    Literal(String),
    /// A plain `:name` token, captured as `([\w-]+)`.
    Named(String),
    /// A token containing `*` (e.g. `:path*`); the `*` widens to `\w*` and
    /// the whole body is captured, literal characters around the `*` kept.
    Wildcard {
        /// Declared parameter name (leading word run of the body)
        name: String,
        /// Full token body including the `*`
        body: String,
    },
    /// A token carrying an embedded regex quantifier (`?` or `+`), captured
    /// with the quantifier passed through as-is.
    Quantified {
        /// Declared parameter name (leading word run of the body)
        name: String,
        /// Full token body including the quantifier
        body: String,
    },
}

impl Segment {
    /// The parameter name declared by this segment, if it is dynamic.
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Named(name) => Some(name),
            Segment::Wildcard { name, .. } | Segment::Quantified { name, .. } => Some(name),
        }
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_body_char(c: char) -> bool {
    is_word(c) || c == '*' || c == '?' || c == '+'
}

/// Scan a path pattern into literal spans and dynamic tokens.
///
/// A token starts at `:` followed by a word character and ends at the first
/// word boundary, so in `/:depart-:arrive` the hyphen stays literal and two
/// separate tokens are declared. Embedded `*`, `?`, and `+` are consumed
/// into the token body and decide its capture form. A `:` not followed by a
/// word character is plain literal text.
#[must_use]
pub fn tokenize(pattern: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek().copied().is_some_and(is_word) {
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            // Non-word characters other than *?+ end the token, so a '-'
            // between tokens is a literal separator.
            let mut body = String::new();
            while chars.peek().copied().is_some_and(is_body_char) {
                if let Some(b) = chars.next() {
                    body.push(b);
                }
            }
            segments.push(classify(body));
        } else {
            literal.push(c);
        }
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

fn classify(body: String) -> Segment {
    let name: String = body.chars().take_while(|&c| is_word(c)).collect();
    if body.contains('*') {
        Segment::Wildcard { name, body }
    } else if body.contains('?') || body.contains('+') {
        Segment::Quantified { name, body }
    } else {
        Segment::Named(body)
    }
}
