use std::fmt;
use std::fs;
use std::path::Path;

use rust_embed::Embed;
use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};
use thiserror::Error;

#[derive(Embed)]
#[folder = "assets/questions/"]
struct BundledBanks;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read question bank {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no bundled question bank named '{0}'")]
    MissingBundled(String),
    #[error("question bank has no chapters")]
    Empty,
    #[error("chapter '{0}' has no questions")]
    EmptyChapter(String),
    #[error("question {number} in chapter '{chapter}' has no options")]
    NoOptions { chapter: String, number: usize },
    #[error("question {number} in chapter '{chapter}' lists option '{option}' twice")]
    DuplicateOption {
        chapter: String,
        number: usize,
        option: String,
    },
    #[error("answer '{answer}' of question {number} in chapter '{chapter}' is not one of its options")]
    AnswerNotInOptions {
        chapter: String,
        number: usize,
        answer: String,
    },
}

/// A question exactly as it appears in the JSON bank.
#[derive(Clone, Debug, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
    /// Position within the chapter as loaded.
    pub original_index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chapter {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Chapter {
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

/// Chapters in source order. Never empty, and no chapter is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    chapters: Vec<Chapter>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn bundled(name: &str) -> Result<Self, DatasetError> {
        let filename = format!("{name}.json");
        let file = BundledBanks::get(&filename)
            .ok_or_else(|| DatasetError::MissingBundled(name.to_string()))?;
        let raw: RawBank = serde_json::from_slice(file.data.as_ref())?;
        Self::from_raw(raw.0)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawBank = serde_json::from_str(json)?;
        Self::from_raw(raw.0)
    }

    pub fn from_raw(raw: Vec<(String, Vec<RawQuestion>)>) -> Result<Self, DatasetError> {
        if raw.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut chapters = Vec::with_capacity(raw.len());
        for (name, raw_questions) in raw {
            if raw_questions.is_empty() {
                return Err(DatasetError::EmptyChapter(name));
            }
            let mut questions = Vec::with_capacity(raw_questions.len());
            for (index, rq) in raw_questions.into_iter().enumerate() {
                validate_question(&name, index, &rq)?;
                questions.push(Question {
                    prompt: rq.question,
                    options: rq.options,
                    answer: rq.answer,
                    original_index: index,
                });
            }
            chapters.push(Chapter { name, questions });
        }

        Ok(Self { chapters })
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Panics if `index` is out of range; callers hold indices from this dataset.
    pub fn chapter(&self, index: usize) -> &Chapter {
        &self.chapters[index]
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.name == name)
    }

    pub fn chapter_names(&self) -> impl Iterator<Item = &str> {
        self.chapters.iter().map(|c| c.name.as_str())
    }

    pub fn question_count(&self) -> usize {
        self.chapters.iter().map(Chapter::len).sum()
    }
}

fn validate_question(chapter: &str, index: usize, rq: &RawQuestion) -> Result<(), DatasetError> {
    let number = index + 1;
    if rq.options.is_empty() {
        return Err(DatasetError::NoOptions {
            chapter: chapter.to_string(),
            number,
        });
    }
    for (i, option) in rq.options.iter().enumerate() {
        if rq.options[..i].contains(option) {
            return Err(DatasetError::DuplicateOption {
                chapter: chapter.to_string(),
                number,
                option: option.clone(),
            });
        }
    }
    if !rq.options.contains(&rq.answer) {
        return Err(DatasetError::AnswerNotInOptions {
            chapter: chapter.to_string(),
            number,
            answer: rq.answer.clone(),
        });
    }
    Ok(())
}

/// Top-level JSON object, keeping chapters in document order.
struct RawBank(Vec<(String, Vec<RawQuestion>)>);

impl<'de> Deserialize<'de> for RawBank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BankVisitor;

        impl<'de> Visitor<'de> for BankVisitor {
            type Value = RawBank;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping chapter names to question lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawBank, A::Error> {
                let mut chapters: Vec<(String, Vec<RawQuestion>)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, questions)) =
                    map.next_entry::<String, Vec<RawQuestion>>()?
                {
                    // A repeated key keeps its first position and takes the later value.
                    if let Some(existing) = chapters.iter_mut().find(|(n, _)| *n == name) {
                        existing.1 = questions;
                    } else {
                        chapters.push((name, questions));
                    }
                }
                Ok(RawBank(chapters))
            }
        }

        deserializer.deserialize_map(BankVisitor)
    }
}
