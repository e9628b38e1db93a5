use ansi_term::{ANSIGenericString, Colour};
use dissimilar::{diff, Chunk};
use std::borrow::Cow;

pub fn paint<'a, I, S: 'a + ToOwned + ?Sized>(
    use_color: bool,
    colour: Colour,
    input: I,
) -> ANSIGenericString<'a, S>
where
    I: Into<Cow<'a, S>>,
    <S as ToOwned>::Owned: std::fmt::Debug,
{
    if use_color {
        colour.paint(input)
    } else {
        let input = input.into();
        input.into()
    }
}

/// Shows how `new` differs from `old`.
///
/// Removed text is red and inserted text is green. Without color, removals are wrapped in
/// `[-` `-]` and insertions in `{+` `+}`.
pub fn render_diff(old: &str, new: &str, use_color: bool) -> String {
    diff(old, new)
        .into_iter()
        .map(|chunk| match chunk {
            Chunk::Equal(text) => text.to_string(),
            Chunk::Delete(text) if use_color => paint(true, Colour::Red, text).to_string(),
            Chunk::Insert(text) if use_color => paint(true, Colour::Green, text).to_string(),
            Chunk::Delete(text) => format!("[-{}-]", text),
            Chunk::Insert(text) => format!("{{+{}+}}", text),
        })
        .collect()
}
