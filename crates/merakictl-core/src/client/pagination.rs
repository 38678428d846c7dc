//! Link-header pagination
//!
//! The Dashboard returns RFC 8288 `Link` headers with `first`, `prev`, `next`
//! and `last` relations. Pages are merged into the first response so callers
//! see a single value.

use serde_json::{Map, Value};

use crate::options::Direction;

/// Keys whose array values are concatenated when object pages are merged
const MERGEABLE_KEYS: &[&str] = &["events", "items"];

/// Find the target of the `rel` matching `direction` in a `Link` header
pub(crate) fn find_link(header: &str, direction: Direction) -> Option<String> {
    // Commas may appear inside a URL, so a segment only starts at '<'
    let mut segments: Vec<String> = Vec::new();
    for piece in header.split(',') {
        match segments.last_mut() {
            Some(last) if !piece.trim_start().starts_with('<') => {
                last.push(',');
                last.push_str(piece);
            }
            _ => segments.push(piece.to_string()),
        }
    }

    segments.iter().find_map(|segment| {
        let segment = segment.trim();
        let end = segment.find('>')?;
        let target = segment.get(1..end)?;
        let is_match = segment[end + 1..].split(';').any(|param| {
            let param = param.trim();
            param
                .strip_prefix("rel=")
                .map(|rel| {
                    rel.trim_matches('"')
                        .split_whitespace()
                        .any(|r| r.eq_ignore_ascii_case(direction.as_str()))
                })
                .unwrap_or(false)
        });
        is_match.then(|| target.to_string())
    })
}

/// Merge `page` into the accumulated response.
///
/// Array pages are concatenated; pages fetched backwards (`prev`) go in front
/// so the merged list keeps the API's ordering. Object pages merge their
/// `events` / `items` arrays and carry over the outer page boundary. Pages of
/// any other shape leave the accumulated value unchanged.
pub(crate) fn merge_pages(accumulated: Value, page: Value, direction: Direction) -> Value {
    match (accumulated, page) {
        (Value::Array(current), Value::Array(incoming)) => {
            Value::Array(join(current, incoming, direction))
        }
        (Value::Object(current), Value::Object(incoming)) => {
            Value::Object(merge_objects(current, incoming, direction))
        }
        (accumulated, _) => accumulated,
    }
}

/// Drop events that occurred after `end_time` from an event-log page.
///
/// Timestamps are compared as ISO 8601 strings. Returns true when any event
/// was at or past the end time, meaning later pages hold nothing wanted.
pub(crate) fn truncate_events_after(value: &mut Value, end_time: &str) -> bool {
    let Some(Value::Array(events)) = value.get_mut("events") else {
        return false;
    };
    let before = events.len();
    events.retain(|event| {
        event
            .get("occurredAt")
            .and_then(Value::as_str)
            .is_none_or(|occurred| occurred <= end_time)
    });
    events.len() < before
        || value
            .get("pageEndAt")
            .and_then(Value::as_str)
            .is_some_and(|page_end| page_end >= end_time)
}

fn merge_objects(
    mut current: Map<String, Value>,
    mut incoming: Map<String, Value>,
    direction: Direction,
) -> Map<String, Value> {
    for key in MERGEABLE_KEYS {
        if let (Some(Value::Array(existing)), Some(Value::Array(more))) =
            (current.get_mut(*key), incoming.remove(*key))
        {
            let earlier = std::mem::take(existing);
            *existing = join(earlier, more, direction);
        }
    }

    let boundary = match direction {
        Direction::Next => "pageEndAt",
        Direction::Prev => "pageStartAt",
    };
    if let Some(value) = incoming.remove(boundary) {
        current.insert(boundary.to_string(), value);
    }

    current
}

fn join(current: Vec<Value>, incoming: Vec<Value>, direction: Direction) -> Vec<Value> {
    match direction {
        Direction::Next => {
            let mut merged = current;
            merged.extend(incoming);
            merged
        }
        Direction::Prev => {
            let mut merged = incoming;
            merged.extend(current);
            merged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HEADER: &str = "<https://api.meraki.com/api/v1/organizations?perPage=2>; rel=first, \
        <https://api.meraki.com/api/v1/organizations?perPage=2&startingAfter=b>; rel=next, \
        <https://api.meraki.com/api/v1/organizations?perPage=2&endingBefore=a>; rel=prev";

    #[test]
    fn test_find_next_and_prev() {
        assert_eq!(
            find_link(HEADER, Direction::Next).as_deref(),
            Some("https://api.meraki.com/api/v1/organizations?perPage=2&startingAfter=b")
        );
        assert_eq!(
            find_link(HEADER, Direction::Prev).as_deref(),
            Some("https://api.meraki.com/api/v1/organizations?perPage=2&endingBefore=a")
        );
    }

    #[test]
    fn test_find_link_quoted_rel_and_comma_in_url() {
        let header = r#"<https://example.test/x?ids=a,b>; rel="next""#;
        assert_eq!(
            find_link(header, Direction::Next).as_deref(),
            Some("https://example.test/x?ids=a,b")
        );
        assert!(find_link(header, Direction::Prev).is_none());
    }

    #[test]
    fn test_merge_array_pages() {
        let merged = merge_pages(json!([1, 2]), json!([3]), Direction::Next);
        assert_eq!(merged, json!([1, 2, 3]));

        let merged = merge_pages(json!([3, 4]), json!([1, 2]), Direction::Prev);
        assert_eq!(merged, json!([1, 2, 3, 4]));
    }

    #[test]
    fn test_merge_event_log_pages() {
        let first = json!({
            "message": null,
            "pageStartAt": "2024-05-02T00:00:00Z",
            "pageEndAt": "2024-05-03T00:00:00Z",
            "events": [{"type": "association"}]
        });
        let older = json!({
            "message": null,
            "pageStartAt": "2024-05-01T00:00:00Z",
            "pageEndAt": "2024-05-02T00:00:00Z",
            "events": [{"type": "disassociation"}]
        });

        let merged = merge_pages(first, older, Direction::Prev);
        assert_eq!(merged["pageStartAt"], "2024-05-01T00:00:00Z");
        assert_eq!(merged["pageEndAt"], "2024-05-03T00:00:00Z");
        assert_eq!(
            merged["events"],
            json!([{"type": "disassociation"}, {"type": "association"}])
        );
    }

    #[test]
    fn test_merge_mismatched_pages_keeps_first() {
        let merged = merge_pages(json!({"a": 1}), json!([1]), Direction::Next);
        assert_eq!(merged, json!({"a": 1}));
    }

    #[test]
    fn test_truncate_events_after_end_time() {
        let mut page = json!({
            "pageEndAt": "2024-05-02T00:00:00Z",
            "events": [
                {"occurredAt": "2024-05-01T10:00:00.000000Z"},
                {"occurredAt": "2024-05-01T14:00:00.000000Z"}
            ]
        });
        assert!(truncate_events_after(&mut page, "2024-05-01T12:00:00Z"));
        assert_eq!(
            page["events"],
            json!([{"occurredAt": "2024-05-01T10:00:00.000000Z"}])
        );

        let mut early = json!({
            "pageEndAt": "2024-05-01T06:00:00Z",
            "events": [{"occurredAt": "2024-05-01T05:00:00Z"}]
        });
        assert!(!truncate_events_after(&mut early, "2024-05-01T12:00:00Z"));
        assert!(!truncate_events_after(&mut json!([1, 2]), "2024-05-01T12:00:00Z"));
    }
}
