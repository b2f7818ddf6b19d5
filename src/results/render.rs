//! Terminal rendering of search responses

use super::types::{SearchResponse, SearchResult};
use serde::{Deserialize, Serialize};

/// Marker printed in place of an absent optional field
pub const MISSING: &str = "None";

/// Which fields are shown per result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Title and URL only
    #[default]
    Compact,
    /// Title, URL, id, score, published date and author
    Detailed,
}

impl RenderStyle {
    fn lines_per_result(&self) -> usize {
        match self {
            Self::Compact => 3,
            Self::Detailed => 7,
        }
    }
}

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{}' (expected text or json)", other)),
        }
    }
}

/// Lazily render `response` into display lines.
///
/// Each result yields its field lines followed by one blank separator, in
/// provider order. Nothing is filtered or re-ordered.
pub fn render(response: &SearchResponse, style: RenderStyle) -> RenderedLines<'_> {
    RenderedLines {
        results: response.results.iter(),
        current: None,
        line: 0,
        style,
    }
}

/// Render the whole response as pretty-printed JSON
pub fn render_json(response: &SearchResponse) -> serde_json::Result<String> {
    serde_json::to_string_pretty(response)
}

/// Iterator over the display lines of a response
pub struct RenderedLines<'a> {
    results: std::slice::Iter<'a, SearchResult>,
    current: Option<&'a SearchResult>,
    line: usize,
    style: RenderStyle,
}

impl<'a> RenderedLines<'a> {
    fn field_line(&self, result: &SearchResult) -> String {
        match (self.style, self.line) {
            (_, 0) => format!("Title: {}", result.title),
            (_, 1) => format!("URL: {}", result.url),
            (RenderStyle::Detailed, 2) => format!("ID: {}", result.id),
            (RenderStyle::Detailed, 3) => format!("Score: {:.4}", result.relevance_score),
            (RenderStyle::Detailed, 4) => format!(
                "Published Date: {}",
                result.published_date.as_deref().unwrap_or(MISSING)
            ),
            (RenderStyle::Detailed, 5) => {
                format!("Author: {}", result.author.as_deref().unwrap_or(MISSING))
            }
            _ => String::new(),
        }
    }
}

impl<'a> Iterator for RenderedLines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.current.is_none() {
            self.current = Some(self.results.next()?);
            self.line = 0;
        }

        let result = self.current?;
        let line = self.field_line(result);

        self.line += 1;
        if self.line == self.style.lines_per_result() {
            self.current = None;
        }

        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let per = self.style.lines_per_result();
        let pending = if self.current.is_some() {
            per - self.line
        } else {
            0
        };
        let remaining = pending + self.results.len() * per;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RenderedLines<'_> {}

impl std::iter::FusedIterator for RenderedLines<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(n: usize) -> SearchResponse {
        SearchResponse::with_results(
            (1..=n)
                .map(|i| {
                    SearchResult::new(format!("https://example.com/{}", i), format!("Result {}", i))
                        .with_score(1.0 / i as f64)
                })
                .collect(),
        )
    }

    #[test]
    fn test_compact_layout() {
        let lines: Vec<String> = render(&response(2), RenderStyle::Compact).collect();
        assert_eq!(
            lines,
            vec![
                "Title: Result 1",
                "URL: https://example.com/1",
                "",
                "Title: Result 2",
                "URL: https://example.com/2",
                "",
            ]
        );
    }

    #[test]
    fn test_render_is_pure_projection() {
        for n in [0, 1, 3, 10] {
            let resp = response(n);
            let first: Vec<String> = render(&resp, RenderStyle::Compact).collect();
            let second: Vec<String> = render(&resp, RenderStyle::Compact).collect();
            assert_eq!(first, second);

            let titles: Vec<&String> = first.iter().filter(|l| l.starts_with("Title: ")).collect();
            let urls: Vec<&String> = first.iter().filter(|l| l.starts_with("URL: ")).collect();
            assert_eq!(titles.len(), n);
            assert_eq!(urls.len(), n);
            for (i, url) in urls.iter().enumerate() {
                assert_eq!(**url, format!("URL: https://example.com/{}", i + 1));
            }
        }
    }

    #[test]
    fn test_detailed_uses_missing_marker() {
        let resp = SearchResponse::with_results(vec![
            SearchResult::new("https://a.com", "A")
                .with_score(0.5)
                .with_author("Jo")
                .with_published_date("2023-01-01"),
            SearchResult::new("https://b.com", "B"),
        ]);

        let lines: Vec<String> = render(&resp, RenderStyle::Detailed).collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[2], "ID: https://a.com");
        assert_eq!(lines[3], "Score: 0.5000");
        assert_eq!(lines[4], "Published Date: 2023-01-01");
        assert_eq!(lines[5], "Author: Jo");
        assert_eq!(lines[6], "");
        assert_eq!(lines[11], "Published Date: None");
        assert_eq!(lines[12], "Author: None");
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let resp = response(2);
        let mut lines = render(&resp, RenderStyle::Compact);
        assert_eq!(lines.len(), 6);
        lines.next();
        assert_eq!(lines.len(), 5);
        let rest: Vec<String> = lines.by_ref().collect();
        assert_eq!(rest.len(), 5);
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_json_output() {
        let json = render_json(&response(1)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["results"][0]["title"], "Result 1");
        assert_eq!(value["results"][0]["score"], 1.0);
    }
}
