use chrono::NaiveDate;
use serde::Deserialize;

/// One entry from `GET /api/events`. Fetched, rendered, discarded.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: String,
    pub event_date: String,
    #[serde(default)]
    pub image_path: Option<String>,
}

pub const HIGHLIGHT_COUNT: usize = 3;

const PLACEHOLDER_IMAGE: &str = "/static/images/event.jpg";

pub fn default_events() -> Vec<Event> {
    vec![
        Event {
            title: "Easter Celebration Service".to_string(),
            description: "A joyous celebration of Christ's resurrection with special music, testimonies, and communion.".to_string(),
            event_date: "2024-03-31".to_string(),
            image_path: None,
        },
        Event {
            title: "Community Outreach Program".to_string(),
            description: "Serving our local community with food distribution and prayer ministry.".to_string(),
            event_date: "2024-03-15".to_string(),
            image_path: None,
        },
        Event {
            title: "Youth Revival Conference".to_string(),
            description: "A powerful weekend of worship, teaching, and fellowship for our young people.".to_string(),
            event_date: "2024-02-28".to_string(),
            image_path: None,
        },
    ]
}

/// A missing, failed, or empty fetch shows the fixed defaults instead.
pub fn events_or_default(fetched: Option<Vec<Event>>) -> Vec<Event> {
    match fetched {
        Some(list) if !list.is_empty() => list,
        _ => default_events(),
    }
}

pub fn highlights(all: &[Event]) -> &[Event] {
    &all[..all.len().min(HIGHLIGHT_COUNT)]
}

/// "2024-03-31" -> "March 31, 2024". Anything unparseable renders verbatim.
pub fn format_event_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn image_src(event: &Event) -> String {
    match &event.image_path {
        Some(path) => format!("/static/{}", path),
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str) -> Event {
        Event {
            title: title.to_string(),
            description: "desc".to_string(),
            event_date: "2025-01-01".to_string(),
            image_path: None,
        }
    }

    #[test]
    fn missing_events_fall_back_to_defaults() {
        let shown = events_or_default(None);
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[0].title, "Easter Celebration Service");
        assert_eq!(shown[2].title, "Youth Revival Conference");
    }

    #[test]
    fn empty_events_fall_back_to_defaults() {
        assert_eq!(events_or_default(Some(Vec::new())), default_events());
    }

    #[test]
    fn fetched_events_pass_through() {
        let list = vec![sample("X")];
        assert_eq!(events_or_default(Some(list.clone())), list);
    }

    #[test]
    fn highlights_cap_at_three() {
        let five: Vec<Event> = (0..5).map(|i| sample(&format!("e{}", i))).collect();
        assert_eq!(highlights(&five).len(), 3);

        let two: Vec<Event> = (0..2).map(|i| sample(&format!("e{}", i))).collect();
        assert_eq!(highlights(&two).len(), 2);
    }

    #[test]
    fn defaults_fill_both_containers() {
        // Highlights and the full list render the same three defaults.
        let shown = events_or_default(None);
        assert_eq!(highlights(&shown), &shown[..]);
    }

    #[test]
    fn formats_iso_dates_for_display() {
        assert_eq!(format_event_date("2024-03-31"), "March 31, 2024");
    }

    #[test]
    fn single_digit_days_are_not_padded() {
        assert_eq!(format_event_date("2024-03-05"), "March 5, 2024");
    }

    #[test]
    fn unparseable_dates_render_verbatim() {
        assert_eq!(format_event_date("next sunday"), "next sunday");
    }

    #[test]
    fn image_paths_are_served_from_static() {
        let mut event = sample("X");
        event.image_path = Some("images/easter.jpg".to_string());
        assert_eq!(image_src(&event), "/static/images/easter.jpg");

        event.image_path = None;
        assert_eq!(image_src(&event), "/static/images/event.jpg");
    }

    #[test]
    fn events_decode_without_image_path() {
        let event: Event =
            serde_json::from_str(r#"{"title":"X","description":"Y","event_date":"2024-03-31"}"#)
                .unwrap();
        assert_eq!(event.image_path, None);
        assert_eq!(event.title, "X");
    }
}
