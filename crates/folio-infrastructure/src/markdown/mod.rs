use folio_domain::project::MarkdownRenderer;
use folio_domain::shared::DomainError;
use pulldown_cmark::{html, Options, Parser};

/// CommonMark renderer with the GitHub-flavoured extensions READMEs usually rely on
#[derive(Debug, Clone)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);
        Self { options }
    }
}

impl CommonMarkRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> Result<String, DomainError> {
        let parser = Parser::new_ext(markdown, self.options);
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, parser);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading() {
        let html = CommonMarkRenderer::new().render("# Hi").unwrap();
        assert_eq!(html, "<h1>Hi</h1>\n");
    }

    #[test]
    fn test_tables_enabled() {
        let html = CommonMarkRenderer::new()
            .render("| a | b |\n|---|---|\n| 1 | 2 |\n")
            .unwrap();
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_raw_html_is_kept() {
        let html = CommonMarkRenderer::new()
            .render("<div class=\"badge\">ok</div>\n")
            .unwrap();
        assert!(html.contains("<div class=\"badge\">ok</div>"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(CommonMarkRenderer::new().render("").unwrap(), "");
    }
}
