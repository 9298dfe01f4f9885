//! Console output formatter for trivia questions

use colored::Colorize;
use trivia_domain::{AnsweredQuestion, Question};

/// Formats questions and answer results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable ANSI colors for everything this formatter produces
    pub fn set_color(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// Format a freshly asked question with numbered answers
    pub fn format_prompt(question: &Question) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(question));
        output.push_str(&format!("{} {}\n\n", "Q:".bold(), question.text()));

        for (i, answer) in question.answers().iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", (i + 1).to_string().yellow(), answer));
        }

        output.push_str(&format!(
            "\n{}\n",
            format!(
                "Type 1-{} to answer, Enter or \"s\" to dismiss",
                question.answers().len()
            )
            .dimmed()
        ));

        output
    }

    /// Format the outcome of an answered question
    pub fn format_result(answered: &AnsweredQuestion) -> String {
        let verdict = if answered.is_correct {
            "Correct!".green().bold()
        } else {
            "Incorrect!".red().bold()
        };

        format!(
            "{} {}\n{} {}\n",
            verdict,
            answered.question.text().dimmed(),
            "A:".bold(),
            answered.question.correct_answer()
        )
    }

    /// Format a batch of questions, answers revealed
    pub fn format_questions(questions: &[Question]) -> String {
        let mut output = String::new();

        for (i, question) in questions.iter().enumerate() {
            output.push_str(&format!(
                "{} {}\n",
                format!("{}.", i + 1).cyan().bold(),
                question.text()
            ));
            output.push_str(&format!(
                "   {} | {} | {}\n",
                question.category(),
                question.difficulty(),
                question.question_type()
            ));
            for answer in question.answers() {
                if question.is_correct(answer) {
                    output.push_str(&format!("   {} {}\n", "*".green(), answer.green()));
                } else {
                    output.push_str(&format!("   - {}\n", answer));
                }
            }
            output.push('\n');
        }

        output
    }

    /// Format a batch of questions as JSON
    pub fn format_json(questions: &[Question]) -> String {
        serde_json::to_string_pretty(questions).unwrap_or_else(|_| "[]".to_string())
    }

    fn header(question: &Question) -> String {
        let line = "=".repeat(60);
        format!(
            "\n{}\n{} {}\n{}\n",
            line.cyan(),
            "Trivia:".cyan().bold(),
            format!("{} ({})", question.category(), question.difficulty()).bold(),
            line.cyan()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_domain::{QuestionCategory, QuestionDifficulty, QuestionType};

    fn capital() -> Question {
        Question::new(
            QuestionCategory::Geography,
            QuestionDifficulty::Easy,
            QuestionType::MultipleChoice,
            "What is the capital of France?",
            "Paris",
            vec!["Rome".to_string(), "Madrid".to_string(), "Berlin".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_prompt_numbers_answers_in_display_order() {
        let output = ConsoleFormatter::format_prompt(&capital());

        assert!(output.contains("What is the capital of France?"));
        assert!(output.contains("Geography"));
        assert!(output.contains("Berlin"));

        let berlin = output.find("Berlin").unwrap();
        let rome = output.find("Rome").unwrap();
        assert!(berlin < rome);
        assert!(output.contains("1-4"));
    }

    #[test]
    fn test_result_reveals_correct_answer() {
        let correct = ConsoleFormatter::format_result(&AnsweredQuestion::new(capital(), "Paris"));
        assert!(correct.contains("Correct!"));
        assert!(correct.contains("Paris"));

        let wrong = ConsoleFormatter::format_result(&AnsweredQuestion::new(capital(), "Rome"));
        assert!(wrong.contains("Incorrect!"));
        assert!(wrong.contains("Paris"));
    }

    #[test]
    fn test_questions_list() {
        let output = ConsoleFormatter::format_questions(&[capital()]);
        assert!(output.contains("What is the capital of France?"));
        assert!(output.contains("Madrid"));
    }

    #[test]
    fn test_json_output() {
        let json = ConsoleFormatter::format_json(&[capital()]);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["correct_answer"], "Paris");
        assert_eq!(value[0]["type"], "multiple");
        assert_eq!(value[0]["category"], "Geography");
        assert_eq!(value[0]["answers"].as_array().unwrap().len(), 4);
    }
}
