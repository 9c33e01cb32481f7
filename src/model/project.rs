// File: src/model/project.rs
//! Pure projection from source-shaped records to display records.
//!
//! Given the same input slice and locale this always produces the same
//! output: no clock reads, no I/O, no reordering.
use chrono::{Datelike, Locale, NaiveDate};

use crate::error::{Error, Result};
use crate::model::item::{DisplayRecord, EventCard, ImageCard, ImageItem, RawEvent, RawRecord};

/// Fixed UTC-offset suffix stripped from time-of-day strings. The feed is
/// pinned to one timezone; kept verbatim rather than generalized.
const OFFSET_SUFFIX: &str = "-5:00";

/// Project raw records into display records, preserving input order.
/// Image items lacking links or metadata are dropped; any malformed event
/// timestamp fails the whole batch.
pub fn project(raw: &[RawRecord], locale: Locale) -> Result<Vec<DisplayRecord>> {
    let mut cards = Vec::with_capacity(raw.len());
    for record in raw {
        match record {
            RawRecord::Event(event) => {
                cards.push(DisplayRecord::Event(project_event(event, locale)?));
            }
            RawRecord::Image(item) => {
                if let Some(card) = project_image(item) {
                    cards.push(DisplayRecord::Image(card));
                }
            }
        }
    }
    Ok(cards)
}

fn split_timestamp(value: &str) -> Result<(&str, &str)> {
    value.split_once('T').ok_or_else(|| Error::MalformedTimestamp {
        value: value.to_string(),
    })
}

fn project_event(event: &RawEvent, locale: Locale) -> Result<EventCard> {
    let (date_part, start_tod) = split_timestamp(&event.start_time)?;
    let (_, end_tod) = split_timestamp(&event.end_time)?;

    let start_date: NaiveDate = date_part.parse().map_err(|_| Error::MalformedTimestamp {
        value: event.start_time.clone(),
    })?;

    Ok(EventCard {
        name: event.details.clone(),
        location: event.location.clone(),
        // First occurrence only.
        start: start_tod.replacen(OFFSET_SUFFIX, "", 1),
        end: end_tod.replacen(OFFSET_SUFFIX, "", 1),
        month: start_date.format_localized("%b", locale).to_string(),
        day: start_date.format_localized("%a", locale).to_string(),
        date: start_date.day(),
    })
}

/// The last href wins across the link entries, paired with the first
/// metadata entry. Items missing either produce no card.
fn project_image(item: &ImageItem) -> Option<ImageCard> {
    let href = item.links.last().map(|link| link.href.clone())?;
    let meta = item.data.first()?;
    Some(ImageCard {
        href,
        title: meta.title.clone(),
        description: meta.description.clone(),
        creator: meta.secondary_creator.clone().unwrap_or_default(),
    })
}
