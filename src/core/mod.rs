//! Core modules for Shiftbreak

pub mod shift;
pub mod corpus;
pub mod scorer;
pub mod analyzer;
pub mod flag;
pub mod report;

pub use shift::ShiftCipher;
pub use corpus::{ReferenceCorpus, CorpusSource, parse_word_list};
pub use scorer::{TextScorer, extract_words, folded_letters, chi_square, shannon_entropy};
pub use analyzer::{CaesarAnalyzer, explain_confidence};
pub use flag::{find_flag, find_flag_in_text, save_flag};
pub use report::{to_json, export_results, load_results, read_ciphertext};
