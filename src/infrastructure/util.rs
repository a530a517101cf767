use crate::application::ports::util::SlugGenerator;

/// Title normalizer producing lowercase kebab-case.
///
/// Steps, in order: lower-case; drop everything except ASCII letters, digits,
/// separator spaces and `-`; turn each space run into `-`; squeeze repeated
/// `-`; trim `-` from both ends. Titles without any letter or digit yield an
/// empty string.
#[derive(Default, Clone, Copy, Debug)]
pub struct TitleSlugGenerator;

impl TitleSlugGenerator {
    pub fn generate(input: &str) -> String {
        let mut slug = String::with_capacity(input.len());
        let mut pending_hyphen = false;

        for ch in input.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            } else if ch == '-' || is_separator_space(ch) {
                pending_hyphen = true;
            }
        }

        slug
    }
}

/// Characters that separate words in a title: ASCII whitespace, the Unicode
/// space separators, line/paragraph separators and the byte-order mark.
/// U+0085 (NEXT LINE) is not a separator and is dropped like punctuation.
fn is_separator_space(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

impl SlugGenerator for TitleSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        Self::generate(input)
    }
}
