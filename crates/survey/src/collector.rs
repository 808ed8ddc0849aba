use icebreak_common::error::{IcebreakError, IcebreakResult};
use icebreak_common::types::{CurrentUser, Submission};
use serde::{Deserialize, Serialize};

/// Position in the linear form: name first, then one answer per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Step {
    Naming,
    /// `index` is 1-based.
    Answering { index: usize },
    Reviewing,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Naming => "naming",
            Self::Answering { .. } => "answering",
            Self::Reviewing => "reviewing",
        }
    }
}

/// Answer collection for one session. Only moves forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collector {
    questions: Vec<String>,
    name: String,
    answers: Vec<String>,
    step: Step,
}

impl Collector {
    pub fn new(questions: Vec<String>) -> IcebreakResult<Self> {
        if questions.is_empty() {
            return Err(IcebreakError::Validation(
                "a session needs at least one question".to_string(),
            ));
        }

        Ok(Self {
            questions,
            name: String::new(),
            answers: Vec::new(),
            step: Step::Naming,
        })
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&str> {
        match self.step {
            Step::Answering { index } => self.questions.get(index - 1).map(String::as_str),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.step == Step::Reviewing
    }

    pub fn submit_name(&mut self, name: &str) -> IcebreakResult<Step> {
        if self.step != Step::Naming {
            return Err(IcebreakError::Validation(format!(
                "name can only be set while naming, session is {}",
                self.step.as_str()
            )));
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(IcebreakError::Validation("name must not be empty".to_string()));
        }

        self.name = name.to_string();
        self.step = Step::Answering { index: 1 };
        Ok(self.step)
    }

    pub fn submit_answer(&mut self, answer: &str) -> IcebreakResult<Step> {
        let index = match self.step {
            Step::Answering { index } => index,
            other => {
                return Err(IcebreakError::Validation(format!(
                    "answers can only be submitted while answering, session is {}",
                    other.as_str()
                )))
            }
        };

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(IcebreakError::Validation(format!(
                "answer to question {index} must not be empty"
            )));
        }

        self.answers.push(answer.to_string());
        self.step = if index == self.questions.len() {
            Step::Reviewing
        } else {
            Step::Answering { index: index + 1 }
        };
        Ok(self.step)
    }

    /// Text sent to the similarity search: all answers, space separated.
    pub fn query_text(&self) -> String {
        self.answers.join(" ")
    }

    pub fn current_user(&self) -> IcebreakResult<CurrentUser> {
        if !self.is_complete() {
            return Err(IcebreakError::Validation(format!(
                "session is still {}, finish the form first",
                self.step.as_str()
            )));
        }

        Ok(CurrentUser {
            name: self.name.clone(),
            questions: self.questions.clone(),
            answers: self.answers.clone(),
        })
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.questions
            .iter()
            .zip(&self.answers)
            .map(|(question, answer)| Submission {
                person: self.name.clone(),
                question: question.clone(),
                answer: answer.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_questions() -> Collector {
        Collector::new(vec!["Q1".into(), "Q2".into(), "Q3".into()]).unwrap()
    }

    #[test]
    fn walks_linearly_to_reviewing() {
        let mut c = three_questions();
        assert_eq!(c.step(), Step::Naming);
        assert_eq!(c.current_question(), None);

        assert_eq!(c.submit_name("  Ada ").unwrap(), Step::Answering { index: 1 });
        assert_eq!(c.name(), "Ada");
        assert_eq!(c.current_question(), Some("Q1"));

        assert_eq!(c.submit_answer("tea").unwrap(), Step::Answering { index: 2 });
        assert_eq!(c.submit_answer(" Rivendell ").unwrap(), Step::Answering { index: 3 });
        assert_eq!(c.current_question(), Some("Q3"));
        assert_eq!(c.submit_answer("knitting").unwrap(), Step::Reviewing);

        assert!(c.is_complete());
        assert_eq!(c.answers(), ["tea", "Rivendell", "knitting"]);
        assert_eq!(c.query_text(), "tea Rivendell knitting");
    }

    #[test]
    fn blank_name_does_not_advance() {
        let mut c = three_questions();
        for name in ["", "   ", "\t\n"] {
            assert!(matches!(c.submit_name(name), Err(IcebreakError::Validation(_))));
            assert_eq!(c.step(), Step::Naming);
        }
    }

    #[test]
    fn blank_answer_does_not_advance() {
        let mut c = three_questions();
        c.submit_name("Ada").unwrap();
        c.submit_answer("one").unwrap();

        assert!(c.submit_answer("  ").is_err());
        assert_eq!(c.step(), Step::Answering { index: 2 });
        assert_eq!(c.answers().len(), 1);
    }

    #[test]
    fn answer_before_name_is_rejected() {
        let mut c = three_questions();
        assert!(c.submit_answer("early").is_err());
        assert_eq!(c.step(), Step::Naming);
    }

    #[test]
    fn no_transitions_out_of_reviewing() {
        let mut c = Collector::new(vec!["Q1".into()]).unwrap();
        c.submit_name("Ada").unwrap();
        c.submit_answer("yes").unwrap();

        assert!(c.submit_name("Bob").is_err());
        assert!(c.submit_answer("more").is_err());
        assert_eq!(c.name(), "Ada");
        assert_eq!(c.answers(), ["yes"]);
    }

    #[test]
    fn current_user_requires_completion() {
        let mut c = three_questions();
        c.submit_name("Ada").unwrap();
        assert!(c.current_user().is_err());

        for a in ["a", "b", "c"] {
            c.submit_answer(a).unwrap();
        }
        let user = c.current_user().unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.questions.len(), user.answers.len());
    }

    #[test]
    fn submissions_pair_questions_with_answers() {
        let mut c = three_questions();
        c.submit_name("Ada").unwrap();
        for a in ["a", "b", "c"] {
            c.submit_answer(a).unwrap();
        }

        let subs = c.submissions();
        assert_eq!(subs.len(), 3);
        assert_eq!(subs[1].question, "Q2");
        assert_eq!(subs[1].answer, "b");
        assert!(subs.iter().all(|s| s.person == "Ada"));
    }

    #[test]
    fn empty_question_list_is_rejected() {
        assert!(Collector::new(Vec::new()).is_err());
    }

    #[test]
    fn step_serializes_with_state_tag() {
        let json = serde_json::to_value(Step::Answering { index: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "answering", "index": 2 }));
    }
}
