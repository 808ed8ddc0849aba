use icebreak_common::error::{IcebreakError, IcebreakResult};
use icebreak_common::types::{CurrentUser, SearchHit};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// Everything one participant answered, in the shape handed to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub qas: Vec<QaPair>,
}

/// Reject a pairing request before anything leaves the process.
pub fn validate_current_user(user: &CurrentUser) -> IcebreakResult<()> {
    if user.name.trim().is_empty() {
        return Err(IcebreakError::Validation(
            "current user name must not be empty".to_string(),
        ));
    }

    if user.answers.len() < user.questions.len() {
        return Err(IcebreakError::Validation(format!(
            "current user answered {} of {} questions",
            user.answers.len(),
            user.questions.len()
        )));
    }

    Ok(())
}

/// Group hits by person in first-appearance order, then overlay the current
/// user. An existing entry with the same name is replaced in place.
pub fn group_profiles(corpus: &[SearchHit], current: &CurrentUser) -> Vec<Profile> {
    let mut profiles: Vec<Profile> = Vec::new();

    for hit in corpus.iter().filter(|h| h.fields.is_complete()) {
        let qa = QaPair {
            question: hit.fields.question.clone(),
            answer: hit.fields.answer.clone(),
        };

        match profiles.iter_mut().find(|p| p.name == hit.fields.person) {
            Some(profile) => profile.qas.push(qa),
            None => profiles.push(Profile {
                name: hit.fields.person.clone(),
                qas: vec![qa],
            }),
        }
    }

    let name = current.name.trim();
    if name.is_empty() {
        return profiles;
    }

    let own = Profile {
        name: name.to_string(),
        qas: current
            .questions
            .iter()
            .zip(&current.answers)
            .map(|(question, answer)| QaPair {
                question: question.clone(),
                answer: answer.clone(),
            })
            .collect(),
    };

    match profiles.iter_mut().find(|p| p.name == own.name) {
        Some(existing) => *existing = own,
        None => profiles.push(own),
    }

    profiles
}
