use std::borrow::Cow;

use super::mode::ReplaceMode;

/// The two characters `\` and `n` as they appear verbatim in text.
pub const LITERAL_NEWLINE: &str = "\\n";

/// Replaces literal `\n` sequences in `text` according to `mode`.
///
/// The input is borrowed back untouched when nothing had to be replaced.
pub fn convert(text: &str, mode: ReplaceMode) -> Cow<'_, str> {
    match mode {
        ReplaceMode::All => replace_all(text),
        ReplaceMode::Unescaped => replace_unescaped(text),
    }
}

/// Like [`convert`], but takes the mode by name. Unknown names leave the
/// text as it is.
pub fn convert_named<'a>(text: &'a str, mode: &str) -> Cow<'a, str> {
    match ReplaceMode::from_name(mode) {
        Some(mode) => convert(text, mode),
        None => Cow::Borrowed(text),
    }
}

fn replace_all(text: &str) -> Cow<'_, str> {
    if text.contains(LITERAL_NEWLINE) {
        Cow::Owned(text.replace(LITERAL_NEWLINE, "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn replace_unescaped(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut output: Option<String> = None;
    // start of the input not yet copied to output
    let mut copied = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        // look-behind is on the original input, not on what was already replaced
        let escaped = i > 0 && bytes[i - 1] == b'\\';
        if bytes[i] == b'\\' && bytes[i + 1] == b'n' && !escaped {
            let out = output.get_or_insert_with(|| String::with_capacity(text.len()));
            out.push_str(&text[copied..i]);
            out.push('\n');
            i += 2;
            copied = i;
        } else {
            i += 1;
        }
    }

    match output {
        Some(mut out) => {
            out.push_str(&text[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}
