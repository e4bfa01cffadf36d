//! Coarse part-of-speech tagging.
//!
//! The latent-semantic strategy only needs to know whether a word is a
//! content word, so tags are coarse and the built-in tagger is a closed-class
//! lexicon plus a few surface rules. Any other tagger can be plugged in
//! through [`PosTagger`].

use crate::language::Language;
use rustc_hash::FxHashMap;

/// Coarse part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Noun.
    Noun,
    /// Verb.
    Verb,
    /// Adjective.
    Adj,
    /// Adverb.
    Adv,
    /// Pronoun.
    Pron,
    /// Preposition or postposition.
    Adp,
    /// Subordinating conjunction.
    Conj,
    /// Coordinating conjunction.
    CConj,
    /// Particle.
    Part,
    /// Numeral.
    Num,
    /// Predicative ("можно", "нельзя").
    Pred,
    /// Interjection.
    Intj,
    /// Punctuation.
    Punct,
    /// Determiner.
    Det,
    /// Anything the tagger cannot classify.
    Other,
}

impl PosTag {
    /// Returns `false` for the function-word classes that never carry topics.
    pub fn is_significant(&self) -> bool {
        !matches!(
            self,
            PosTag::Adp
                | PosTag::Pron
                | PosTag::Conj
                | PosTag::CConj
                | PosTag::Part
                | PosTag::Num
                | PosTag::Pred
                | PosTag::Intj
                | PosTag::Punct
                | PosTag::Det
                | PosTag::Adv
        )
    }
}

/// Assigns one tag per word; the whole sentence is passed as context.
pub trait PosTagger: Send + Sync {
    /// Tags the words of one sentence.
    fn tag(&self, words: &[&str]) -> Vec<PosTag>;
}

/// Closed-class lexicon tagger.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: FxHashMap<&'static str, PosTag>,
    english_suffixes: bool,
}

impl LexiconTagger {
    /// Creates a tagger with the closed-class lexicon of `language`.
    ///
    /// Languages without a bundled lexicon fall back to the surface rules
    /// (numerals and punctuation).
    pub fn new(language: Language) -> Self {
        let mut lexicon = FxHashMap::default();
        let entries: &[(&[&'static str], PosTag)] = match language {
            Language::English => ENGLISH,
            Language::Russian => RUSSIAN,
            _ => &[],
        };
        for (words, tag) in entries {
            for word in *words {
                lexicon.insert(*word, *tag);
            }
        }

        Self {
            lexicon,
            english_suffixes: language == Language::English,
        }
    }

    fn tag_word(&self, word: &str) -> PosTag {
        if word.chars().all(|c| !c.is_alphanumeric()) {
            return PosTag::Punct;
        }
        if is_numeral(word) {
            return PosTag::Num;
        }

        let lowered = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(lowered.as_str()) {
            return *tag;
        }

        if self.english_suffixes
            && lowered.ends_with("ly")
            && lowered.chars().count() > 4
            && !LY_NON_ADVERBS.contains(&lowered.as_str())
        {
            return PosTag::Adv;
        }

        PosTag::Other
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, words: &[&str]) -> Vec<PosTag> {
        words.iter().map(|w| self.tag_word(w)).collect()
    }
}

/// Digits with optional group or decimal separators.
fn is_numeral(word: &str) -> bool {
    word.chars().any(|c| c.is_numeric())
        && word
            .chars()
            .all(|c| c.is_numeric() || matches!(c, '.' | ',' | '\'' | '_'))
}

const LY_NON_ADVERBS: &[&str] = &[
    "family", "apply", "supply", "reply", "assembly", "italy", "july", "holy", "ugly", "silly",
    "belly", "bully", "jelly", "lovely", "friendly", "lonely", "likely", "early", "daily",
    "weekly", "monthly", "yearly", "costly", "elderly", "anomaly", "monopoly", "butterfly",
];

const ENGLISH: &[(&[&str], PosTag)] = &[
    (
        &[
            "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves",
            "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its",
            "itself", "we", "us", "our", "ours", "ourselves", "they", "them", "their", "theirs",
            "themselves", "who", "whom", "whose", "what", "which", "someone", "anyone",
            "everyone", "nobody", "somebody", "something", "anything", "everything", "nothing",
        ],
        PosTag::Pron,
    ),
    (
        &[
            "about", "above", "across", "after", "against", "along", "among", "around", "at",
            "before", "behind", "below", "beneath", "beside", "between", "beyond", "by",
            "despite", "down", "during", "except", "for", "from", "in", "inside", "into",
            "near", "of", "off", "on", "onto", "out", "outside", "over", "past", "since",
            "through", "throughout", "to", "toward", "towards", "under", "underneath", "until",
            "upon", "via", "with", "within", "without",
        ],
        PosTag::Adp,
    ),
    (&["and", "but", "or", "nor", "yet", "so"], PosTag::CConj),
    (
        &[
            "although", "because", "if", "unless", "whereas", "whether", "while", "though",
            "that", "whenever", "wherever",
        ],
        PosTag::Conj,
    ),
    (
        &[
            "a", "an", "the", "this", "these", "those", "each", "every", "either", "neither",
            "some", "any", "no", "all", "both", "few", "many", "much", "several", "such",
            "another", "other",
        ],
        PosTag::Det,
    ),
    (&["not", "n't", "to", "up"], PosTag::Part),
    (
        &[
            "oh", "ah", "wow", "hey", "hello", "alas", "ouch", "oops", "hmm", "yes", "okay",
        ],
        PosTag::Intj,
    ),
    (
        &[
            "very", "too", "also", "just", "only", "even", "still", "already", "again", "often",
            "never", "always", "sometimes", "soon", "now", "then", "here", "there", "where",
            "when", "how", "why", "almost", "quite", "rather", "perhaps", "however", "well",
            "once", "twice", "ever", "else", "together", "away", "back",
        ],
        PosTag::Adv,
    ),
    (
        &[
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "twenty", "thirty", "hundred", "thousand", "million",
            "billion", "first", "second", "third",
        ],
        PosTag::Num,
    ),
];

const RUSSIAN: &[(&[&str], PosTag)] = &[
    (
        &[
            "я", "меня", "мне", "мной", "ты", "тебя", "тебе", "тобой", "он", "его", "ему", "им",
            "нём", "она", "её", "ей", "ею", "ней", "оно", "мы", "нас", "нам", "нами", "вы",
            "вас", "вам", "вами", "они", "их", "ими", "них", "себя", "себе", "собой", "кто",
            "что", "никто", "ничто", "некто", "нечто", "мой", "твой", "свой", "наш", "ваш",
        ],
        PosTag::Pron,
    ),
    (
        &[
            "в", "во", "на", "с", "со", "к", "ко", "по", "о", "об", "обо", "от", "ото", "до",
            "из", "изо", "у", "за", "под", "над", "при", "про", "без", "для", "через", "между",
            "перед", "около", "вокруг", "после", "среди", "вдоль", "сквозь", "ради",
        ],
        PosTag::Adp,
    ),
    (&["и", "а", "но", "или", "либо", "да", "зато", "однако"], PosTag::CConj),
    (
        &[
            "что", "чтобы", "если", "когда", "потому", "хотя", "пока", "будто", "словно",
            "ибо", "раз",
        ],
        PosTag::Conj,
    ),
    (
        &[
            "не", "ни", "же", "ли", "бы", "вот", "вон", "даже", "лишь", "только", "уже", "ещё",
            "еще", "разве", "неужели", "ведь", "пусть",
        ],
        PosTag::Part,
    ),
    (
        &[
            "можно", "нельзя", "надо", "нужно", "пора", "жаль", "некогда", "нечего",
        ],
        PosTag::Pred,
    ),
    (&["ах", "ох", "эх", "ой", "увы", "ура", "эй", "ну"], PosTag::Intj),
    (
        &[
            "этот", "эта", "это", "эти", "тот", "та", "то", "те", "такой", "такая", "такое",
            "такие", "весь", "вся", "всё", "все", "каждый", "любой", "какой", "который",
        ],
        PosTag::Det,
    ),
    (
        &[
            "очень", "здесь", "там", "тут", "где", "куда", "откуда", "сейчас", "теперь",
            "тогда", "всегда", "никогда", "иногда", "часто", "редко", "быстро", "медленно",
            "хорошо", "плохо", "много", "мало", "почти", "совсем", "слишком", "так", "как",
            "снова", "опять", "вместе",
        ],
        PosTag::Adv,
    ),
    (
        &[
            "один", "одна", "одно", "два", "две", "три", "четыре", "пять", "шесть", "семь",
            "восемь", "девять", "десять", "сто", "тысяча", "миллион", "первый", "второй",
            "третий",
        ],
        PosTag::Num,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_classes_english() {
        let tagger = LexiconTagger::new(Language::English);
        let tags = tagger.tag(&["they", "walked", "into", "the", "garden", "quickly"]);
        assert_eq!(
            tags,
            vec![
                PosTag::Pron,
                PosTag::Other,
                PosTag::Adp,
                PosTag::Det,
                PosTag::Other,
                PosTag::Adv
            ]
        );
    }

    #[test]
    fn test_ly_exceptions() {
        let tagger = LexiconTagger::new(Language::English);
        assert_eq!(tagger.tag(&["family"]), vec![PosTag::Other]);
    }

    #[test]
    fn test_numerals_and_punctuation() {
        let tagger = LexiconTagger::new(Language::German);
        assert_eq!(
            tagger.tag(&["2024", "3,14", "--", "Haus"]),
            vec![PosTag::Num, PosTag::Num, PosTag::Punct, PosTag::Other]
        );
    }

    #[test]
    fn test_russian_lexicon() {
        let tagger = LexiconTagger::new(Language::Russian);
        let tags = tagger.tag(&["мы", "пошли", "в", "парк", "и", "можно"]);
        assert_eq!(tags[0], PosTag::Pron);
        assert_eq!(tags[1], PosTag::Other);
        assert_eq!(tags[2], PosTag::Adp);
        assert_eq!(tags[4], PosTag::CConj);
        assert_eq!(tags[5], PosTag::Pred);
    }

    #[test]
    fn test_significance() {
        assert!(PosTag::Noun.is_significant());
        assert!(PosTag::Other.is_significant());
        assert!(!PosTag::Adv.is_significant());
        assert!(!PosTag::Det.is_significant());
    }
}
