//! Operator table and longest-match lookup.
//!
//! Operators are matched by maximal munch: at a given position the longest
//! table entry that the source starts with wins, so `===` is one token and
//! never `==` followed by `=`.

/// Every recognized operator, longest first.
///
/// Ordering is load-bearing: [`match_operator`] returns the first entry the
/// input starts with.
pub const OPERATORS: &[&str] = &[
    // 4
    ">>>=",
    // 3
    "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "...",
    // 2
    "==", "!=", "<=", ">=", "&&", "||", "??", "?.", "=>", "++", "--", "+=", "-=", "*=", "/=",
    "%=", "&=", "|=", "^=", "**", "<<", ">>",
    // 1
    "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?",
];

/// Length in bytes of the longest operator at the start of `input`.
///
/// Returns `None` when no operator, not even a single-character one, starts
/// the input.
#[allow(
    clippy::cast_possible_truncation,
    reason = "operator lengths are at most 4"
)]
pub fn match_operator(input: &[u8]) -> Option<u32> {
    let first = *input.first()?;
    if !OPERATOR_START[first as usize] {
        return None;
    }
    OPERATORS
        .iter()
        .find(|op| input.starts_with(op.as_bytes()) && !is_conditional_before_fraction(op, input))
        .map(|op| op.len() as u32)
}

/// `a?.5:1` is a conditional with a fractional operand, not optional
/// chaining: `?.` never applies when a digit follows.
fn is_conditional_before_fraction(op: &str, input: &[u8]) -> bool {
    op == "?." && input.get(2).is_some_and(u8::is_ascii_digit)
}

/// Bytes that begin at least one operator. A lone `.` starts `...` but
/// matches nothing by itself, leaving it to the punctuation rule.
static OPERATOR_START: [bool; 256] = {
    let mut table = [false; 256];
    let starts = b"+-*/%=<>!&|^~?.";
    let mut i = 0;
    while i < starts.len() {
        table[starts[i] as usize] = true;
        i += 1;
    }
    table
};
