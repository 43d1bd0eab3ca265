//! tagcloud — count the words of a document and render the most frequent
//! ones as a tag cloud whose font sizes follow relative frequency.
//!
//! The pipeline runs top to bottom, one document per run:
//!
//! 1. [`source::open_source`] opens the text.
//! 2. [`count::scan`] tokenizes each line ([`tokenize`]) and builds a
//!    [`count::FrequencyMap`].
//! 3. [`cloud::build_cloud`] selects and sizes the top words.
//! 4. [`output::write_output`] renders the result.

pub mod cloud;
pub mod count;
pub mod error;
pub mod output;
pub mod source;
pub mod tokenize;

pub use error::CloudError;
