//! `--nice` reflow: turn a space-separated token dump back into something
//! resembling source lines.

/// Rewrites applied in order to the space-joined token text. Order matters:
/// `;` gains a newline before ` ;` loses its space.
const REFLOW: &[(&str, &str)] = &[
    (" ( ", "("),
    (" ) ", ")"),
    (" [ ", "["),
    (" ] ", "]"),
    (" ,", ","),
    (" . ", "."),
    (";", ";\n"),
    (" ;", ";"),
    ("{ ", "{\n"),
    ("} ", "}\n"),
];

/// Reflow `spaced`, where every token is followed by a single space.
pub fn reflow(spaced: &str) -> String {
    REFLOW
        .iter()
        .fold(spaced.to_string(), |text, (from, to)| text.replace(from, to))
}

/// Collects token texts, each followed by one space, for a final
/// [`reflow`].
#[derive(Debug, Default)]
pub struct NiceBuffer {
    spaced: String,
}

impl NiceBuffer {
    pub fn push(&mut self, text: &str) {
        self.spaced.push_str(text);
        self.spaced.push(' ');
    }

    pub fn is_empty(&self) -> bool {
        self.spaced.is_empty()
    }

    pub fn finish(self) -> String {
        reflow(&self.spaced)
    }
}
