//! Deck loader for word and irregular-verb lists.
//!
//! # Format
//! ```json
//! [
//!   { "english": "cat", "swedish": "katt" }
//! ]
//! ```
//!
//! ```json
//! [
//!   { "swedish": "vara", "infinitive": "be", "past": "was/were", "pastParticiple": "been" }
//! ]
//! ```

use crate::error::{LoadError, Result};
use crate::grading::{normalize, Punctuation, ALTERNATIVE_SEPARATOR};
use crate::types::{Mode, Pool, PoolEntry, VerbForm, VerbRecord, VocabularyPair};
use serde_json::{Map, Value};

/// Parse a JSON word list.
pub fn parse_words(content: &str) -> Result<Vec<VocabularyPair>> {
    parse_records(content)?
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let record = Record::new(index, value)?;
            Ok(VocabularyPair {
                english: record.answer("english", Punctuation::WithCommas)?,
                swedish: record.answer("swedish", Punctuation::WithCommas)?,
            })
        })
        .collect()
}

/// Parse a JSON irregular-verb list.
pub fn parse_verbs(content: &str) -> Result<Vec<VerbRecord>> {
    parse_records(content)?
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let record = Record::new(index, value)?;
            Ok(VerbRecord {
                swedish: record.required("swedish")?,
                infinitive: record.answer("infinitive", Punctuation::Basic)?,
                past: record.answer("past", Punctuation::Basic)?,
                past_participle: record.answer("pastParticiple", Punctuation::Basic)?,
            })
        })
        .collect()
}

/// One pool entry per word; directions are drawn at shuffle time.
pub fn load_words(words: Vec<VocabularyPair>) -> Pool {
    Pool {
        mode: Mode::Words,
        entries: words.into_iter().map(PoolEntry::Word).collect(),
    }
}

/// Three pool entries per verb, one for each English form.
pub fn load_verbs(verbs: Vec<VerbRecord>) -> Pool {
    let entries = verbs
        .into_iter()
        .flat_map(|verb| {
            VerbForm::ALL
                .into_iter()
                .map(move |form| PoolEntry::Verb(verb.clone(), form))
        })
        .collect();

    Pool {
        mode: Mode::Verbs,
        entries,
    }
}

/// Parse and expand the source list for `mode`.
pub fn load_pool(mode: Mode, content: &str) -> Result<Pool> {
    match mode {
        Mode::Words => parse_words(content).map(load_words),
        Mode::Verbs => parse_verbs(content).map(load_verbs),
    }
}

fn parse_records(content: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| LoadError::malformed(format!("invalid JSON: {}", e)))?;

    match value {
        Value::Array(records) => Ok(records),
        _ => Err(LoadError::malformed("expected a JSON array of records")),
    }
}

struct Record<'a> {
    index: usize,
    fields: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    fn new(index: usize, value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { index, fields }),
            _ => Err(LoadError::MalformedSourceData {
                index: Some(index),
                field: None,
                reason: "expected an object".to_string(),
            }),
        }
    }

    fn required(&self, field: &'static str) -> Result<String> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Err(LoadError::malformed_field(self.index, field, "missing")),
            Some(Value::String(text)) if text.trim().is_empty() => {
                Err(LoadError::malformed_field(self.index, field, "empty"))
            }
            Some(Value::String(text)) => Ok(text.clone()),
            Some(_) => Err(LoadError::malformed_field(self.index, field, "expected a string")),
        }
    }

    /// A required field that is graded against typed input. Every `/`
    /// alternative must keep at least one character after normalization.
    fn answer(&self, field: &'static str, punctuation: Punctuation) -> Result<String> {
        let text = self.required(field)?;
        if text
            .split(ALTERNATIVE_SEPARATOR)
            .any(|alternative| normalize(alternative, punctuation).is_empty())
        {
            return Err(LoadError::malformed_field(
                self.index,
                field,
                "empty answer after normalization",
            ));
        }
        Ok(text)
    }
}
