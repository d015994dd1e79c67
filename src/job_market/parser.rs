// src/job_market/parser.rs
use scraper::{ElementRef, Html, Selector};

use super::PostingSummary;
use crate::error::CollectError;
use crate::utils::clean_text;

/// Knows where posting fields live in the upstream markup.
pub trait MarkupParser: Send + Sync {
    /// Split a search-result page into one markup fragment per posting.
    /// An empty result means the search is exhausted.
    fn split_listing(&self, html: &str) -> Vec<String>;

    fn parse_posting_summary(&self, fragment: &str) -> Result<PostingSummary, CollectError>;

    /// Body text of a posting detail page
    fn parse_posting_detail(&self, html: &str) -> Result<String, CollectError>;
}

const LISTING_ITEM: &str = "li";
const TITLE: &str = "h3.base-search-card__title";
const COMPANY: &str = "h4.base-search-card__subtitle";
const LOCATION: &str = "span.job-search-card__location";
const POSTED_AT: &str = "div.base-search-card__metadata time";
const LINK: &str = "a.base-card__full-link";
const DESCRIPTION: &str = "div.description__text";

const SUMMARY_CONTEXT: &str = "posting summary";
const DETAIL_CONTEXT: &str = "posting detail";

/// Parser for LinkedIn's guest job-search markup
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkedInParser;

impl LinkedInParser {
    pub fn new() -> Self {
        Self
    }

    fn select_first<'a>(document: &'a Html, selector_str: &str) -> Option<ElementRef<'a>> {
        let selector = Selector::parse(selector_str).ok()?;
        document.select(&selector).next()
    }

    fn required_text(
        document: &Html,
        selector_str: &'static str,
        context: &'static str,
    ) -> Result<String, CollectError> {
        Self::select_first(document, selector_str)
            .map(|element| Self::element_text(&element))
            .ok_or_else(|| CollectError::missing(selector_str, context))
    }

    fn element_text(element: &ElementRef) -> String {
        clean_text(&element.text().collect::<Vec<_>>().join(" "))
    }
}

impl MarkupParser for LinkedInParser {
    fn split_listing(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        match Selector::parse(LISTING_ITEM) {
            Ok(selector) => document.select(&selector).map(|item| item.html()).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn parse_posting_summary(&self, fragment: &str) -> Result<PostingSummary, CollectError> {
        let document = Html::parse_fragment(fragment);

        let title = Self::required_text(&document, TITLE, SUMMARY_CONTEXT)?;
        let company = Self::required_text(&document, COMPANY, SUMMARY_CONTEXT)?;
        let location = Self::required_text(&document, LOCATION, SUMMARY_CONTEXT)?;

        let posted_date = Self::select_first(&document, POSTED_AT)
            .and_then(|time| time.value().attr("datetime"))
            .map(|date| date.trim().to_string())
            .filter(|date| !date.is_empty());

        let link = Self::select_first(&document, LINK)
            .and_then(|anchor| anchor.value().attr("href"))
            .map(|href| href.trim().to_string())
            .filter(|href| !href.is_empty())
            .ok_or_else(|| CollectError::missing("a.base-card__full-link[href]", SUMMARY_CONTEXT))?;

        Ok(PostingSummary {
            title,
            company,
            location,
            posted_date,
            link,
        })
    }

    fn parse_posting_detail(&self, html: &str) -> Result<String, CollectError> {
        let document = Html::parse_document(html);
        Self::required_text(&document, DESCRIPTION, DETAIL_CONTEXT)
    }
}
