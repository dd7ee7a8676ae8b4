//! Line-based interactive prompts

use crate::error::{NumsortError, Result};
use crate::numbers::SortOrder;
use std::io::{self, BufRead, Write};

pub const INPUT_FILE_PROMPT: &str =
    "Enter the name of the input file (enter filename with extension like 'input.txt'): ";
pub const SORT_ORDER_PROMPT: &str =
    "Enter the sorting order (1 for ascending, anything else for descending): ";

const DELIMITER_PROMPT_TEMPLATE: &str =
    "Enter the delimiter used in the input file (default: '{default}'): ";
const OUTPUT_FILE_PROMPT_TEMPLATE: &str = "Enter the name of the output file (default: {default}): ";

pub fn delimiter_prompt(default: &str) -> String {
    DELIMITER_PROMPT_TEMPLATE.replace("{default}", default)
}

pub fn output_file_prompt(default: &str) -> String {
    OUTPUT_FILE_PROMPT_TEMPLATE.replace("{default}", default)
}

/// Asks questions on `output` and reads one line per answer from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `question` and blocks for one line.
    ///
    /// The returned answer has its line terminator removed but is otherwise
    /// untouched. End of input yields [`NumsortError::InputClosed`].
    pub fn ask(&mut self, question: &str) -> Result<String> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(NumsortError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn ask_input_file(&mut self) -> Result<String> {
        self.ask(INPUT_FILE_PROMPT)
    }

    /// Empty answer means `default`
    pub fn ask_delimiter(&mut self, default: &str) -> Result<String> {
        let answer = self.ask(&delimiter_prompt(default))?;
        Ok(or_default(answer, default))
    }

    pub fn ask_sort_order(&mut self) -> Result<SortOrder> {
        let answer = self.ask(SORT_ORDER_PROMPT)?;
        Ok(SortOrder::from_answer(&answer))
    }

    /// Empty answer means `default`
    pub fn ask_output_file(&mut self, default: &str) -> Result<String> {
        let answer = self.ask(&output_file_prompt(default))?;
        Ok(or_default(answer, default))
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn or_default(answer: String, default: &str) -> String {
    if answer.is_empty() {
        default.to_string()
    } else {
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_writes_question_and_strips_newline() {
        let mut p = prompter("input.txt\n");
        assert_eq!(p.ask("Q? ").unwrap(), "input.txt");

        let (_, out) = p.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "Q? ");
    }

    #[test]
    fn test_ask_strips_crlf() {
        let mut p = prompter("data.txt\r\n");
        assert_eq!(p.ask("").unwrap(), "data.txt");
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut p = prompter("last");
        assert_eq!(p.ask("").unwrap(), "last");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(p.ask("").unwrap_err(), NumsortError::InputClosed));
    }

    #[test]
    fn test_ask_sort_order() {
        let mut p = prompter("1\n\n2\n");
        assert_eq!(p.ask_sort_order().unwrap(), SortOrder::Ascending);
        assert_eq!(p.ask_sort_order().unwrap(), SortOrder::Descending);
        assert_eq!(p.ask_sort_order().unwrap(), SortOrder::Descending);
    }

    #[test]
    fn test_ask_output_file_default() {
        let mut p = prompter("\nsorted.txt\n");
        assert_eq!(p.ask_output_file("output.txt").unwrap(), "output.txt");
        assert_eq!(p.ask_output_file("output.txt").unwrap(), "sorted.txt");
    }

    #[test]
    fn test_ask_delimiter_default_and_custom() {
        let mut p = prompter("\n;\n");
        assert_eq!(p.ask_delimiter(", ").unwrap(), ", ");
        assert_eq!(p.ask_delimiter(", ").unwrap(), ";");

        let (_, out) = p.into_inner();
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown, delimiter_prompt(", ").repeat(2));
    }

    #[test]
    fn test_prompt_templates_show_default() {
        assert_eq!(
            output_file_prompt("output.txt"),
            "Enter the name of the output file (default: output.txt): "
        );
        assert_eq!(
            delimiter_prompt(";"),
            "Enter the delimiter used in the input file (default: ';'): "
        );
    }

    #[test]
    fn test_prompt_order_is_preserved() {
        let mut p = prompter("in.txt\n1\nout.txt\n");
        assert_eq!(p.ask_input_file().unwrap(), "in.txt");
        assert_eq!(p.ask_sort_order().unwrap(), SortOrder::Ascending);
        assert_eq!(p.ask_output_file("output.txt").unwrap(), "out.txt");

        let (_, out) = p.into_inner();
        let shown = String::from_utf8(out).unwrap();
        let input_at = shown.find(INPUT_FILE_PROMPT).unwrap();
        let order_at = shown.find(SORT_ORDER_PROMPT).unwrap();
        let output_at = shown.find(&output_file_prompt("output.txt")).unwrap();
        assert!(input_at < order_at && order_at < output_at);
    }
}
