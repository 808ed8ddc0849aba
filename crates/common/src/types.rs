use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub instance_id: Uuid,
}

impl ServiceInfo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            instance_id: Uuid::new_v4(),
        }
    }
}

/// One answered question by one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub person: String,
    pub question: String,
    pub answer: String,
}

/// The fields requested from the vector index for every hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitFields {
    #[serde(default)]
    pub person: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl HitFields {
    /// Records missing any of the three values are ignored by grouping and counting.
    pub fn is_complete(&self) -> bool {
        !self.person.is_empty() && !self.question.is_empty() && !self.answer.is_empty()
    }
}

impl From<Submission> for HitFields {
    fn from(s: Submission) -> Self {
        Self {
            person: s.person,
            question: s.question,
            answer: s.answer,
        }
    }
}

/// The participant whose answers drive a pairing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(
        rename = "_score",
        alias = "score",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,
    #[serde(default)]
    pub fields: HitFields,
}
