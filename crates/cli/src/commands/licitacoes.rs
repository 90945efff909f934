//! Procurement notice listing.
//!
//! Responsibilities:
//! - Translate `--search`, `--page`, `--per-page` into a `ListQuery`.
//! - Render one page with its position.
//!
//! Does NOT handle:
//! - Following pages automatically; scripts pass `--page`.

use anyhow::Result;
use clap::Subcommand;
use lap_client::{ListEvent, ListQuery};
use lap_config::Config;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{OutputOptions, build_client_from_config};
use crate::formatters::PageOutput;

#[derive(Debug, Subcommand)]
pub enum LicitacoesCommand {
    /// List procurement notices
    List {
        /// Free-text search over number and object
        #[arg(short, long)]
        search: Option<String>,

        /// Page number (starts at 1)
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Items per page (defaults to LAP_PER_PAGE)
        #[arg(long)]
        per_page: Option<u32>,
    },
}

/// Build the list query the same way the interactive list does: filters first,
/// then the page, since setting a filter resets to page 1.
pub(crate) fn build_query(
    default_per_page: u32,
    per_page: Option<u32>,
    filters: &[(&str, Option<&str>)],
    page: u32,
) -> ListQuery {
    let mut query = ListQuery::new(per_page.unwrap_or(default_per_page));
    for (key, value) in filters {
        if let Some(value) = value {
            query.apply(ListEvent::set_filter(*key, *value));
        }
    }
    query.apply(ListEvent::GoToPage(page));
    query
}

pub async fn run(
    config: &Config,
    command: LicitacoesCommand,
    out: &OutputOptions,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        LicitacoesCommand::List {
            search,
            page,
            per_page,
        } => {
            let query = build_query(
                config.list.per_page,
                per_page,
                &[("search", search.as_deref())],
                page,
            );
            info!(page = query.page(), search = ?search, "Listing licitações");

            let client = build_client_from_config(config)?;
            let result = cancel.run(client.list_licitacoes(&query)).await?;

            let output = PageOutput {
                items: result.items,
                total: result.total,
                page: query.page(),
                pages: result.pages,
            };
            out.emit(&out.formatter().format_licitacoes(&output)?)?;
            out.export(&output.items).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_and_page_survive_together() {
        let query = build_query(20, None, &[("search", Some("pregão"))], 2);
        assert_eq!(query.page(), 2);
        assert_eq!(
            query.params(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "20".to_string()),
                ("search".to_string(), "pregão".to_string()),
            ]
        );
    }

    #[test]
    fn blank_search_is_not_sent() {
        let query = build_query(20, Some(50), &[("search", Some("  "))], 1);
        assert_eq!(query.filter("search"), None);
        assert_eq!(query.per_page(), 50);
    }
}
