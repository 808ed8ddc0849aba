//! Reads the answer sheet: a `Question` column plus one column per person.

use std::io::Read;

use anyhow::{Context, Result};
use icebreak_common::types::Submission;
use icebreak_upstream::UpsertRecord;
use unicode_normalization::UnicodeNormalization;

pub const QUESTION_COLUMN: &str = "Question";

/// Lowercase ASCII form of a name for use inside a record id.
pub fn sanitize_for_id(text: &str) -> String {
    text.to_lowercase()
        .nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .replace(' ', "_")
}

/// One record per non-empty answer cell. Rows without a question are skipped
/// but still count toward the row number in the id.
pub fn read_records<R: Read>(input: R) -> Result<Vec<UpsertRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers().context("unable to read CSV headers")?.clone();
    let question_idx = headers
        .iter()
        .position(|h| h.trim() == QUESTION_COLUMN)
        .with_context(|| format!("CSV has no {QUESTION_COLUMN:?} column"))?;

    let mut records = Vec::new();
    for (row_num, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("unable to read CSV row {row_num}"))?;

        let question = row.get(question_idx).unwrap_or("").trim();
        if question.is_empty() {
            continue;
        }

        for (idx, person) in headers.iter().enumerate() {
            if idx == question_idx {
                continue;
            }
            let answer = row.get(idx).unwrap_or("").trim();
            if answer.is_empty() {
                continue;
            }

            let id = format!("q{row_num}-{}", sanitize_for_id(person));
            records.push(UpsertRecord::new(
                id,
                Submission {
                    person: person.to_string(),
                    question: question.to_string(),
                    answer: answer.to_string(),
                },
            ));
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SHEET: &str = "\
Question,Ada Lovelace,José Núñez,Bo
What is your favorite hot beverage?,tea,café con leche,
,orphan answer,ignored,ignored
Which fictional place would you visit?,The Shire,  ,Hogwarts
";

    #[test]
    fn sanitize_lowercases_and_transliterates() {
        assert_eq!(sanitize_for_id("Ada Lovelace"), "ada_lovelace");
        assert_eq!(sanitize_for_id("José Núñez"), "jose_nunez");
        assert_eq!(sanitize_for_id("Zoë  Ødegaard"), "zoe__degaard");
    }

    #[test]
    fn builds_ids_from_row_number_and_person() {
        let records = read_records(Cursor::new(SHEET)).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "q0-ada_lovelace",
                "q0-jose_nunez",
                "q2-ada_lovelace",
                "q2-bo",
            ]
        );
    }

    #[test]
    fn keeps_display_names_and_trims_answers() {
        let records = read_records(Cursor::new(SHEET)).unwrap();
        let jose = &records[1];
        assert_eq!(jose.person, "José Núñez");
        assert_eq!(jose.answer, "café con leche");
        assert_eq!(jose.question, "What is your favorite hot beverage?");
    }

    #[test]
    fn short_rows_are_tolerated() {
        let sheet = "Question,Ada,Bo\nFavorite color?,green\n";
        let records = read_records(Cursor::new(sheet)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "q0-ada");
    }

    #[test]
    fn missing_question_column_is_an_error() {
        let err = read_records(Cursor::new("Prompt,Ada\nHi,there\n")).unwrap_err();
        assert!(err.to_string().contains("Question"));
    }
}
