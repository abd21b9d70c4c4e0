use crate::parser::base::ParseError;

pub(crate) trait UserInterface {
    fn print_error(&self, error: ParseError);
    fn print_error_context(&self, tokens: &[&str], offset: usize);
}

#[derive(Default)]
pub(crate) struct Console {}

impl UserInterface for Console {
    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, tokens: &[&str], offset: usize) {
        let (representation, caret) = error_context(tokens, offset);
        eprintln!("{representation}");
        eprintln!("{caret}");
    }
}

/// Render the tokens on a single line, with a caret on the following line pointing at `offset`.
///
/// The `offset` counts the bytes of the tokens, but not the spaces between them.
pub(crate) fn error_context(tokens: &[&str], offset: usize) -> (String, String) {
    let mut start = 0;
    // The character column of the caret in the representation.
    let mut column = 0;
    let mut within = false;

    for token in tokens {
        if offset < start + token.len() || (token.is_empty() && offset == start) {
            column += token
                .char_indices()
                .take_while(|(index, _)| *index < offset - start)
                .count();
            within = true;
            break;
        }

        start += token.len();
        column += token.chars().count() + 1;
    }

    if !within {
        column += offset.saturating_sub(start);
    }

    (
        tokens.join(" "),
        format!("{:>width$}", "^", width = column + 1),
    )
}
