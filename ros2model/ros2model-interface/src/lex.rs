//! Classification of single definition-file lines.

use std::borrow::Cow;

use nom::{
    IResult,
    bytes::complete::{take_till1, take_while, take_while1},
    sequence::{preceded, terminated},
};

/// Outcome of classifying one physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A field declaration. `type_token` is array-flattened and dot-separated.
    Field {
        type_token: String,
        field_name: String,
    },
    Skip(SkipReason),
}

/// Why a line produced no field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Full-line comment, or nothing left after stripping an inline comment.
    Comment,
    /// Any line containing `=`. Constants are not part of the model.
    Constant,
    Blank,
    /// No whitespace separates a type from a field name.
    Malformed,
}

impl LineClass {
    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field { .. })
    }
}

/// Classify one line of a `.msg`, `.srv` or `.action` file.
///
/// Rules, in order: comment / constant / blank lines are skipped, an inline
/// `#` comment is cut off, any `[...]` becomes `[]`, the text splits at the
/// first whitespace run into type and field name, and `/` in the type
/// becomes `.`.
pub fn classify_line(line: &str) -> LineClass {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.starts_with('#') {
        return LineClass::Skip(SkipReason::Comment);
    }
    if line.contains('=') {
        return LineClass::Skip(SkipReason::Constant);
    }
    if line.trim().is_empty() {
        return LineClass::Skip(SkipReason::Blank);
    }

    let code = line.split_once('#').map_or(line, |(code, _)| code);
    if code.trim().is_empty() {
        return LineClass::Skip(SkipReason::Comment);
    }

    let code = normalize_array_brackets(code);
    let Ok((rest, type_token)) = split_declaration(&code) else {
        return LineClass::Skip(SkipReason::Malformed);
    };
    let field_name = rest.trim();
    if field_name.is_empty() {
        return LineClass::Skip(SkipReason::Malformed);
    }

    LineClass::Field {
        type_token: type_token.replace('/', "."),
        field_name: field_name.to_string(),
    }
}

/// Replace the span from the first `[` to the last `]` with `[]`.
///
/// Fixed (`[3]`) and bounded (`[<=5]`) sizes both collapse to an unbounded
/// marker. Applying it twice is the same as applying it once.
pub fn normalize_array_brackets(text: &str) -> Cow<'_, str> {
    let Some(open) = text.find('[') else {
        return Cow::Borrowed(text);
    };
    match text.rfind(']') {
        Some(close) if close == open + 1 => Cow::Borrowed(text),
        Some(close) if close > open => {
            Cow::Owned(format!("{}[]{}", &text[..open], &text[close + 1..]))
        }
        _ => Cow::Borrowed(text),
    }
}

/// Type token, then the (untrimmed) remainder after the separating whitespace.
fn split_declaration(line: &str) -> IResult<&str, &str> {
    preceded(
        take_while(char::is_whitespace),
        terminated(
            take_till1(char::is_whitespace),
            take_while1(char::is_whitespace),
        ),
    )(line)
}
