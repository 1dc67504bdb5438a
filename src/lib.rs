//! Word frequency ranking: count the words of a text and report the most
//! frequent ones without sorting the whole vocabulary.

pub mod analyze;
pub mod config;
pub mod counter;
pub mod error;
pub mod heap;
pub mod input;
pub mod logging;
pub mod report;
pub mod tokenizer;
pub mod topn;

pub use analyze::{analyze_source, analyze_text, Analysis};
pub use counter::{count, WordCount};
pub use error::{Error, InputError};
pub use heap::{FrequencyHeap, RankedEntry};
pub use report::Format;
pub use topn::{top_n, TopN, WordFrequency, DEFAULT_TOP_N};
