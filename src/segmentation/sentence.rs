//! Rule-based sentence boundary detection.
//!
//! Periods that belong to abbreviations, initials, titles, decimal numbers
//! and the short forms of the document language are marked as protected
//! first; the text is then split after every unprotected `.`, `!` or `?`
//! (plus any trailing closing quotes or brackets) that is followed by
//! whitespace, the end of the text, or an uppercase letter glued to the
//! period. A period followed by a lowercase word never ends a sentence.
//! Sentences are returned as trimmed slices of the input, so they are
//! byte-identical to the source.

use crate::language::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
}

/// Patterns whose periods never end a sentence, in any language.
static PROTECTED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // Composite abbreviation (et al.)
        r"\bet al\.",
        // Decimal numbers (3.14)
        r"\d\.\d",
        // Leading decimals (.625)
        r"(?:^|\s)\.\d",
        // Letter abbreviations (U.S.A., e.g., т.е.)
        r"(?:\b\p{L}\.){2,}",
        // Single initials (J. K. Rowling)
        r"\b\p{Lu}\.",
        // Titles
        r"\b(?:Mr|Mrs|Ms|Dr|Prof|Sr|Jr|St|Mt|Gen|Col|Capt|Lt|Sgt|Rev|Hon)\.",
    ])
});

/// English short forms that precede a name or a number.
static ENGLISH_SHORT_FORMS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\b(?:vs|Fig|Figs|Vol|Vols|approx|Ch|Eq|Sec)\.",
        r"\b(?:No|Nos|Nr|pp|p)\.\s*\d",
        r"\b(?:Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec)\.\s*\d",
    ])
});

/// Russian short forms that precede a name or a number (г. Москва, ул.
/// Ленина, рис. 3). Forms that may close a sentence (др., руб., т. д.) rely
/// on the lowercase continuation rule instead.
static RUSSIAN_SHORT_FORMS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\b(?:г|ул|пер|пл|просп|пр|им|стр|рис|табл|см|ср|проф|акад|доц|св|кв|обл|р-н)\.",
        r"\b(?:гг|тыс|млн|млрд|руб|коп|п|с|т|д)\.\s*\d",
    ])
});

fn short_forms(language: Language) -> &'static [Regex] {
    match language {
        Language::English => ENGLISH_SHORT_FORMS.as_slice(),
        Language::Russian => RUSSIAN_SHORT_FORMS.as_slice(),
        _ => &[],
    }
}

/// Characters that may trail a sentence ender and still belong to the sentence.
const CLOSERS: &[char] = &[')', ']', '"', '\'', '»', '\u{201D}', '\u{2019}'];

#[inline]
fn is_ender(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Marks the byte offsets of periods that must not end a sentence.
fn protected_periods(text: &str, language: Language) -> Vec<bool> {
    let mut protected = vec![false; text.len()];
    for pattern in PROTECTED_PATTERNS.iter().chain(short_forms(language)) {
        for m in pattern.find_iter(text) {
            for (offset, byte) in m.as_str().bytes().enumerate() {
                if byte == b'.' {
                    protected[m.start() + offset] = true;
                }
            }
        }
    }
    protected
}

fn push_trimmed(text: &str, range: Range<usize>, spans: &mut Vec<Range<usize>>) {
    let slice = &text[range.clone()];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let start = range.start + (slice.len() - slice.trim_start().len());
    spans.push(start..start + trimmed.len());
}

/// Returns the byte ranges of the sentences in `text`, in document order,
/// using English short forms.
///
/// Every range is trimmed and non-empty. Empty or whitespace-only input
/// yields no ranges.
pub fn sentence_spans(text: &str) -> Vec<Range<usize>> {
    sentence_spans_for(text, Language::English)
}

/// Returns the byte ranges of the sentences in `text` written in `language`.
pub fn sentence_spans_for(text: &str, language: Language) -> Vec<Range<usize>> {
    let protected = protected_periods(text, language);
    let mut spans = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if !is_ender(c) || protected[pos] {
            prev = Some(c);
            continue;
        }

        let before_ender = prev;
        let mut end = pos + c.len_utf8();
        let mut last = c;
        while let Some(&(next_pos, next)) = chars.peek() {
            let continues = (is_ender(next) && !protected[next_pos]) || CLOSERS.contains(&next);
            if !continues {
                break;
            }
            end = next_pos + next.len_utf8();
            last = next;
            chars.next();
        }
        prev = Some(last);

        let boundary = match chars.peek() {
            None => true,
            // "в г. москве", "And then... it happened"
            Some(&(_, next)) if next.is_whitespace() => {
                c != '.' || !text[end..].trim_start().starts_with(char::is_lowercase)
            }
            // Unstick "word.Word"
            Some(&(_, next)) => {
                c == '.' && next.is_uppercase() && before_ender.is_some_and(|b| b.is_lowercase())
            }
        };

        if boundary {
            push_trimmed(text, start..end, &mut spans);
            start = end;
        }
    }

    push_trimmed(text, start..text.len(), &mut spans);
    spans
}

/// Splits text into sentences.
///
/// # Example
/// ```
/// use lexsum::segmentation::split_sentences;
///
/// let text = "Dr. Smith went to Washington. He arrived at 3.14 p.m.";
/// let sentences = split_sentences(text);
/// assert_eq!(sentences.len(), 2);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    split_sentences_for(text, Language::English)
}

/// Splits text written in `language` into sentences.
///
/// # Example
/// ```
/// use lexsum::segmentation::split_sentences_for;
/// use lexsum::Language;
///
/// let sentences = split_sentences_for("Я живу в г. Москва. Это город.", Language::Russian);
/// assert_eq!(sentences, vec!["Я живу в г. Москва.", "Это город."]);
/// ```
pub fn split_sentences_for(text: &str, language: Language) -> Vec<String> {
    sentence_spans_for(text, language)
        .into_iter()
        .map(|range| text[range].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let sentences = split_sentences("Hello world. This is a test.");
        assert_eq!(sentences, vec!["Hello world.", "This is a test."]);
    }

    #[test]
    fn test_titles() {
        let sentences = split_sentences("Dr. Smith went to Washington.");
        assert_eq!(sentences, vec!["Dr. Smith went to Washington."]);
    }

    #[test]
    fn test_letter_abbreviations() {
        assert_eq!(split_sentences("People in the U.S.A. love freedom.").len(), 1);
        assert_eq!(split_sentences("Это, т.е. пример, работает. Да.").len(), 2);
    }

    #[test]
    fn test_initials() {
        let sentences = split_sentences("J. K. Rowling wrote Harry Potter. It was successful.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].starts_with("J. K. Rowling"));
    }

    #[test]
    fn test_decimals() {
        let sentences = split_sentences("The value was 3.14159. Then it changed.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.14159"));

        let sentences = split_sentences("The result was .625. That is correct.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains(".625"));
    }

    #[test]
    fn test_suspension_points() {
        let sentences = split_sentences("And then... it happened. Something amazing.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("..."));
    }

    #[test]
    fn test_suspension_points_end_sentence() {
        let sentences = split_sentences("Wait... What? No!");
        assert_eq!(sentences, vec!["Wait...", "What?", "No!"]);
    }

    #[test]
    fn test_lowercase_continues_sentence() {
        let sentences = split_sentences("We bought apples, pears, etc. and went home. Then we slept.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].ends_with("went home."));
    }

    #[test]
    fn test_english_short_forms() {
        let text = "See Fig. 3 and No. 12 for details. The meeting is on Jan. 5 this year.";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 2, "{:?}", sentences);
        assert!(sentences[1].contains("Jan. 5"));

        // Short forms before a capitalized word still close the sentence
        assert_eq!(split_sentences("It was in January. No one came.").len(), 2);
    }

    #[test]
    fn test_russian_short_forms() {
        let sentences = split_sentences_for("Я живу в г. Москва. Это город.", Language::Russian);
        assert_eq!(sentences, vec!["Я живу в г. Москва.", "Это город."]);

        let text = "Офис на ул. Ленина, см. рис. 2. Цена 5 тыс. руб. за метр. Были книги, журналы и т. д. Потом всё закончилось.";
        let sentences = split_sentences_for(text, Language::Russian);
        assert_eq!(sentences.len(), 4, "{:?}", sentences);
        assert_eq!(sentences[0], "Офис на ул. Ленина, см. рис. 2.");
        assert_eq!(sentences[1], "Цена 5 тыс. руб. за метр.");
        assert_eq!(sentences[2], "Были книги, журналы и т. д.");
    }

    #[test]
    fn test_short_forms_are_per_language() {
        let text = "Я живу в г. Москва. Это город.";
        assert_eq!(split_sentences_for(text, Language::English).len(), 3);
    }

    #[test]
    fn test_question_and_exclamation() {
        let sentences = split_sentences("Is this working? Yes it is! Great. Really?! Sure.");
        assert_eq!(sentences, vec!["Is this working?", "Yes it is!", "Great.", "Really?!", "Sure."]);
    }

    #[test]
    fn test_closing_quotes_and_parens() {
        let sentences = split_sentences("(This is a sentence.) And this is another.");
        assert_eq!(sentences, vec!["(This is a sentence.)", "And this is another."]);

        let sentences = split_sentences(r#"He said "Hello." Then he left."#);
        assert_eq!(sentences, vec![r#"He said "Hello.""#, "Then he left."]);
    }

    #[test]
    fn test_unstick() {
        let sentences = split_sentences("It ended.Then it began.");
        assert_eq!(sentences, vec!["It ended.", "Then it began."]);
    }

    #[test]
    fn test_et_al() {
        let text = "According to Smith et al. the results were clear. This was expected.";
        assert_eq!(split_sentences(text).len(), 2);
    }

    #[test]
    fn test_complex_text() {
        let text = "For years, people in the U.A.E.R. have accepted murky air. \
            But public dissent has been growing! \
            In July alone, two demonstrations turned violent after about 1.5 minutes... \
            The man found the result to be .625. \
            (This is another sentence in parens.) \
            This is the last sentence.";

        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 6, "{:?}", sentences);
        assert!(sentences[0].contains("U.A.E.R."));
        assert!(sentences[2].ends_with("1.5 minutes..."));
        assert_eq!(sentences[3], "The man found the result to be .625.");
        assert_eq!(sentences[5], "This is the last sentence.");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_no_terminal_punctuation() {
        assert_eq!(
            split_sentences("No ending punctuation here"),
            vec!["No ending punctuation here"]
        );
    }

    #[test]
    fn test_spans_are_slices_of_input() {
        let text = "  Первое предложение.  Второе!\nТретье?  ";
        let spans = sentence_spans(text);
        let sentences: Vec<&str> = spans.iter().map(|r| &text[r.clone()]).collect();
        assert_eq!(sentences, vec!["Первое предложение.", "Второе!", "Третье?"]);
    }
}
