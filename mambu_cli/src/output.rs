#[derive(Clone, Debug)]
pub enum OutputFormat {
    Raw,
    Pretty,
}

/// Prints a response body. `Pretty` re-indents JSON and falls back to raw text.
pub fn print_body(body: &str, format: &OutputFormat) {
    println!("{}", render_body(body, format));
}

fn render_body(body: &str, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Raw => body.to_string(),
        OutputFormat::Pretty => serde_json::from_str::<serde_json::Value>(body)
            .and_then(|value| serde_json::to_string_pretty(&value))
            .unwrap_or_else(|_| body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_output_is_verbatim() {
        let body = r#"{"id":"123",  "firstName":"Jane"}"#;
        assert_eq!(render_body(body, &OutputFormat::Raw), body);
    }

    #[test]
    fn pretty_output_indents_json() {
        let rendered = render_body(r#"{"id":"123"}"#, &OutputFormat::Pretty);
        assert_eq!(rendered, "{\n  \"id\": \"123\"\n}");
    }

    #[test]
    fn pretty_output_keeps_non_json() {
        assert_eq!(render_body("<html>", &OutputFormat::Pretty), "<html>");
    }
}
