use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub answer: String,
}
