//! Command-line argument definitions

use clap::{ArgAction, Parser};
use semsearch::results::OutputFormat;
use semsearch::{Category, SearchOptions, SearchType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "semsearch", version)]
#[command(about = "Send a query to a semantic search provider and print the results")]
pub struct Cli {
    /// Query text (read from stdin when omitted)
    pub query: Vec<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of results to request (provider default when omitted)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub num_results: Option<i64>,

    /// Search type: neural or keyword
    #[arg(short = 't', long = "type")]
    pub search_type: Option<SearchType>,

    /// Only return results from this domain (repeatable)
    #[arg(short = 'd', long = "include-domain")]
    pub include_domains: Vec<String>,

    /// Never return results from this domain (repeatable)
    #[arg(short = 'x', long = "exclude-domain")]
    pub exclude_domains: Vec<String>,

    /// Restrict to a category (company, news, pdf, paper, tweet, repository, movie, song, personal-site)
    #[arg(long)]
    pub category: Option<Category>,

    /// Earliest publication date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub start_published_date: Option<String>,

    /// Latest publication date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub end_published_date: Option<String>,

    /// Also print id, score, published date and author
    #[arg(long)]
    pub detailed: bool,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Query from positional arguments, if any were given
    pub fn query_text(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }

    /// Options set on the command line, to be merged over the settings file
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            num_results: self.num_results,
            search_type: self.search_type,
            include_domains: self.include_domains.clone(),
            exclude_domains: self.exclude_domains.clone(),
            category: self.category,
            start_published_date: self.start_published_date.clone(),
            end_published_date: self.end_published_date.clone(),
        }
    }
}

/// Process exit code for a failed run: 1 for invalid input, 2 for everything else
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<semsearch::Error>() {
        Some(semsearch::Error::Validation(_)) => 1,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semsearch::{Error, ProviderError, ProviderErrorKind, ValidationError};

    #[test]
    fn test_parse_full_command_line() {
        let cli = Cli::try_parse_from([
            "semsearch",
            "-n",
            "5",
            "--type",
            "keyword",
            "-d",
            "instagram.com",
            "--category",
            "personal-site",
            "-f",
            "json",
            "-vv",
            "best",
            "pizza",
            "in",
            "brooklyn",
        ])
        .unwrap();

        assert_eq!(cli.query_text().as_deref(), Some("best pizza in brooklyn"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, Some(OutputFormat::Json));

        let options = cli.search_options();
        assert_eq!(options.num_results, Some(5));
        assert_eq!(options.search_type, Some(SearchType::Keyword));
        assert_eq!(options.include_domains, vec!["instagram.com".to_string()]);
        assert_eq!(options.category, Some(Category::PersonalSite));
    }

    #[test]
    fn test_negative_count_reaches_validation() {
        let cli = Cli::try_parse_from(["semsearch", "-n", "-3", "rust"]).unwrap();
        assert_eq!(cli.num_results, Some(-3));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["semsearch", "--category", "podcast", "rust"]).is_err());
    }

    #[test]
    fn test_query_is_optional() {
        let cli = Cli::try_parse_from(["semsearch"]).unwrap();
        assert_eq!(cli.query_text(), None);
    }

    #[test]
    fn test_exit_code_mapping() {
        let err = anyhow::Error::from(Error::Validation(ValidationError::EmptyQuery));
        assert_eq!(exit_code(&err), 1);

        let err = anyhow::Error::from(Error::Provider(ProviderError::new(
            ProviderErrorKind::RateLimited,
        )));
        assert_eq!(exit_code(&err), 2);

        let err = anyhow::Error::from(Error::Config("missing API key".to_string()));
        assert_eq!(exit_code(&err), 2);

        let err = anyhow::Error::from(std::io::Error::new(std::io::ErrorKind::Other, "broken pipe"));
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_exit_code_survives_context() {
        use anyhow::Context;

        let err = Err::<(), _>(Error::Validation(ValidationError::ConflictingDomainFilters))
            .context("while building the request")
            .unwrap_err();
        assert_eq!(exit_code(&err), 1);
    }
}
