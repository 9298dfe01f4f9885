//! Provider payload decoding
//!
//! Turns the JSON returned by the Open Trivia Database into [`Question`]s.
//! The first missing or invalid field fails the whole batch.

use serde_json::Value;
use tracing::debug;
use trivia_domain::{DecodeError, Question, QuestionCategory};

/// Decode a full API response into its questions
///
/// A missing `results` list is an error that carries the `response_code`.
/// A non-zero code next to a present (even empty) list is only logged.
pub fn decode_response(body: &Value) -> Result<Vec<Question>, DecodeError> {
    let response_code = body.get("response_code").and_then(Value::as_i64);

    let results = body
        .get("results")
        .and_then(Value::as_array)
        .ok_or(DecodeError::MissingResults { response_code })?;

    match response_code {
        Some(0) => {}
        Some(code) => debug!(
            "Provider returned response_code {} with {} results",
            code,
            results.len()
        ),
        None => debug!("Provider response has no response_code"),
    }

    results.iter().map(decode_question).collect()
}

/// Decode one entry of the `results` list
pub fn decode_question(entry: &Value) -> Result<Question, DecodeError> {
    let category = QuestionCategory::from_label(&required_str(entry, "category")?)?;
    let difficulty = required_str(entry, "difficulty")?.parse()?;
    let question_type = required_str(entry, "type")?.parse()?;
    let text = required_str(entry, "question")?;
    let correct_answer = required_str(entry, "correct_answer")?;
    let incorrect_answers = required_str_list(entry, "incorrect_answers")?;

    Question::new(
        category,
        difficulty,
        question_type,
        text,
        correct_answer,
        incorrect_answers,
    )
}

/// Decode HTML entities (`&amp;`, `&quot;`, `&#039;`, `&eacute;`, ...)
///
/// Text containing `&` goes through the HTML fragment parser, so this is not
/// a pure entity decoder: raw tags are dropped (`"a &amp; <b>x</b>"` becomes
/// `"a & x"`) and `\r\n` is normalized to `\n`. Provider payloads always
/// encode `<`, so only entities are affected in practice.
pub fn decode_html_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    scraper::Html::parse_fragment(text)
        .root_element()
        .text()
        .collect()
}

fn required_str(entry: &Value, field: &'static str) -> Result<String, DecodeError> {
    match entry.get(field) {
        None | Some(Value::Null) => Err(DecodeError::MissingField(field)),
        Some(Value::String(s)) => Ok(decode_html_entities(s)),
        Some(other) => Err(DecodeError::InvalidField {
            field,
            reason: format!("expected a string, got {}", other),
        }),
    }
}

fn required_str_list(entry: &Value, field: &'static str) -> Result<Vec<String>, DecodeError> {
    let items = match entry.get(field) {
        None | Some(Value::Null) => return Err(DecodeError::MissingField(field)),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(DecodeError::InvalidField {
                field,
                reason: format!("expected a list, got {}", other),
            });
        }
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(decode_html_entities(s)),
            Value::Null => Err(DecodeError::MissingField(field)),
            other => Err(DecodeError::InvalidField {
                field,
                reason: format!("expected a string entry, got {}", other),
            }),
        })
        .collect()
}
