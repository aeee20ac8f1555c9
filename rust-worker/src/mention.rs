//! Mention text parsing.
//!
//! Teams delivers the message with the bot mention rendered as an `<at>` element:
//!
//! ```text
//! <at>Weather</at> New York, US
//! ```
//!
//! The accepted grammar is `<at>NAME</at> CITY[, CC]` where `CC` is an
//! optional 2-3 letter uppercase country code.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static MENTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*<at>[^<]*</at>\s+(?P<city>[^,]*?)\s*(?:,\s*(?P<country>[A-Z]{2,3}))?\s*$")
        .expect("Invalid mention pattern")
});

/// City and optional country code extracted from a mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: String,
    pub country: Option<String>,
}

impl LocationQuery {
    /// Provider query string, `city` or `city,CC`.
    pub fn to_query(&self) -> String {
        match &self.country {
            Some(cc) => format!("{},{}", self.city, cc),
            None => self.city.clone(),
        }
    }
}

/// Parse the city and country out of mention text.
///
/// Returns `None` if the mention token or the city is missing, or if a
/// country code is given but is not 2-3 uppercase letters.
pub fn parse_city_and_country(text: &str) -> Option<LocationQuery> {
    // Teams pads the mention with an HTML entity rather than a plain space
    let normalized = text.replace("&nbsp;", " ");

    let Some(caps) = MENTION_PATTERN.captures(&normalized) else {
        debug!(text_length = text.len(), "mention_pattern_no_match");
        return None;
    };

    let city = caps.name("city")?.as_str().trim();
    if city.is_empty() {
        debug!("mention_city_missing");
        return None;
    }

    Some(LocationQuery {
        city: city.to_string(),
        country: caps.name("country").map(|m| m.as_str().to_string()),
    })
}
