//! Text processing: stop words, stemming, part-of-speech filtering and tokenization.

mod normalizer;
mod pos;
mod stemmer;
mod stopwords;
mod tokenizer;

pub use normalizer::Normalizer;
pub use pos::{LexiconTagger, PosTag, PosTagger};
pub use stemmer::WordStemmer;
pub use stopwords::StopwordFilter;
pub use tokenizer::{Sentence, Tokenizer};
