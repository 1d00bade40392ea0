//! JSON to model converters.
//!
//! Last.fm payloads are loosely shaped:
//!
//! - A list with one element is sent as a bare object, and an empty list
//!   is sent as a missing key or a blank string.
//! - Entities nested in other payloads are sometimes a bare string
//!   (`"artist": "Cher"`), sometimes `{"name": ...}` and sometimes
//!   `{"#text": ...}`.
//! - Numbers arrive as text.
//!
//! Every list goes through [`one_or_many`], every text field through
//! [`get_text`] and every number through [`get_count`], so each model
//! factory only lists its fields.

use serde_json::Value;

use crate::error::{LastfmError, Result};
use crate::models::{
    Album, Artist, Event, Image, ImageSize, Location, Page, ScrobbleResult, Session, Tag, Track,
    User, Venue, WeeklyChart, Wiki,
};

/// Build a model from a decoded payload.
pub trait FromApi: Sized {
    /// Normalize `json` into `Self`.
    ///
    /// Missing optional fields default to `None`, zero or empty. Fails only
    /// when the payload has the wrong overall shape or a numeric field
    /// holds something that is not a number.
    fn from_api(json: &Value) -> Result<Self>;
}

/// Normalize a "one or many" value into a list.
///
/// - missing, `null` or a blank string: empty
/// - an array: its elements
/// - anything else: a single element
pub fn normalize_to_list(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::String(s)) if s.trim().is_empty() => Vec::new(),
        Some(other) => vec![other],
    }
}

/// [`normalize_to_list`] applied to `json[key]`.
pub fn one_or_many<'a>(json: &'a Value, key: &str) -> Vec<&'a Value> {
    normalize_to_list(json.get(key))
}

/// Normalize `json[outer][inner]`, the usual `{"tags": {"tag": [...]}}`
/// wrapping. A non-object `outer` counts as empty.
pub fn nested_list<'a>(json: &'a Value, outer: &str, inner: &str) -> Vec<&'a Value> {
    match json.get(outer) {
        Some(container @ Value::Object(_)) => one_or_many(container, inner),
        _ => Vec::new(),
    }
}

/// Normalize a list field and convert every element.
pub fn parse_list<T: FromApi>(items: Vec<&Value>) -> Result<Vec<T>> {
    items.into_iter().map(T::from_api).collect()
}

/// Extract text from a string, number or `{"#text": ...}` value.
///
/// Blank strings count as absent.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(obj) => obj.get("#text").and_then(as_text),
        _ => None,
    }
}

/// Get text from `json[key]`, `None` if missing or blank.
pub fn get_text(json: &Value, key: &str) -> Option<String> {
    json.get(key).and_then(as_text)
}

/// Get text from `json[key]`, empty string if missing.
fn get_str(json: &Value, key: &str) -> String {
    get_text(json, key).unwrap_or_default()
}

/// Parse a numeric value; missing, `null` and blank are zero.
fn parse_count(value: Option<&Value>, key: &str) -> Result<u64> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n.as_u64().ok_or_else(|| not_numeric(key, &n.to_string())),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(0),
        Some(Value::String(s)) => s.trim().parse().map_err(|_| not_numeric(key, s)),
        Some(Value::Object(obj)) if obj.contains_key("#text") => {
            parse_count(obj.get("#text"), key)
        }
        Some(other) => Err(not_numeric(key, &other.to_string())),
    }
}

fn not_numeric(key: &str, raw: &str) -> LastfmError {
    LastfmError::InvalidPayload(format!("field `{}` is not numeric: {:?}", key, raw))
}

/// Get an unsigned count from `json[key]`.
pub fn get_count(json: &Value, key: &str) -> Result<u64> {
    parse_count(json.get(key), key)
}

/// Get a count that must fit in `u32`.
fn get_u32(json: &Value, key: &str) -> Result<u32> {
    let n = get_count(json, key)?;
    u32::try_from(n).map_err(|_| not_numeric(key, &n.to_string()))
}

/// Get a Unix timestamp; absent or blank yields `None`.
fn get_timestamp(json: &Value, key: &str) -> Result<Option<i64>> {
    match json.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) if as_text(value).is_none() => Ok(None),
        Some(value) => {
            let n = parse_count(Some(value), key)?;
            i64::try_from(n).map(Some).map_err(|_| not_numeric(key, &n.to_string()))
        }
    }
}

/// Get a float; absent or blank yields `None`.
fn get_float(json: &Value, key: &str) -> Result<Option<f64>> {
    match json.get(key) {
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(value) => match as_text(value) {
            None => Ok(None),
            Some(s) => s.trim().parse::<f64>().map(Some).map_err(|_| {
                LastfmError::InvalidPayload(format!("field `{}` is not a number: {:?}", key, s))
            }),
        },
        None => Ok(None),
    }
}

/// Interpret `"1"`, `1`, `true` and `"true"` as true.
fn get_bool(json: &Value, key: &str) -> bool {
    match json.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(value) => matches!(as_text(value).as_deref(), Some("1") | Some("true")),
        None => false,
    }
}

/// The `@attr` object, or `null` when missing.
fn attr(json: &Value) -> &Value {
    json.get("@attr").unwrap_or(&Value::Null)
}

/// Extract images from the `image` list.
pub fn extract_images(json: &Value) -> Vec<Image> {
    one_or_many(json, "image")
        .into_iter()
        .filter_map(|img| {
            let url = as_text(img)?;
            let size = get_text(img, "size")
                .map(|s| ImageSize::parse(&s))
                .unwrap_or_default();
            Some(Image::new(url, size))
        })
        .collect()
}

/// Extract a wiki/bio object.
fn extract_wiki(json: &Value, key: &str) -> Option<Wiki> {
    let wiki = json.get(key).filter(|w| w.is_object())?;
    Some(Wiki {
        summary: get_text(wiki, "summary"),
        content: get_text(wiki, "content"),
        published: get_text(wiki, "published"),
    })
}

/// Take `json[key]` or fail with a descriptive error.
pub fn require<'a>(json: &'a Value, key: &str) -> Result<&'a Value> {
    match json.get(key) {
        Some(Value::Null) | None => Err(LastfmError::InvalidPayload(format!(
            "missing `{}` in response",
            key
        ))),
        Some(value) => Ok(value),
    }
}

fn expect_object(json: &Value, what: &str) -> Result<()> {
    if json.is_object() {
        Ok(())
    } else {
        Err(LastfmError::InvalidPayload(format!(
            "expected {} object, got {}",
            what, json
        )))
    }
}

/// Parse a list container with an `@attr` pagination header.
pub fn parse_page<T: FromApi>(container: &Value, item_key: &str) -> Result<Page<T>> {
    let header = attr(container);
    Ok(Page {
        items: parse_list(one_or_many(container, item_key))?,
        page: get_u32(header, "page")?,
        per_page: get_u32(header, "perPage")?,
        total_pages: get_u32(header, "totalPages")?,
        total: get_count(header, "total")?,
    })
}

/// Parse the `results` object of a `*.search` call.
///
/// Search results use OpenSearch counters instead of `@attr`.
pub fn parse_search_page<T: FromApi>(
    results: &Value,
    matches_key: &str,
    item_key: &str,
) -> Result<Page<T>> {
    let items = parse_list(nested_list(results, matches_key, item_key))?;
    let total = get_count(results, "opensearch:totalResults")?;
    let per_page = get_u32(results, "opensearch:itemsPerPage")?;
    let start = get_count(results, "opensearch:startIndex")?;
    let (page, total_pages) = if per_page == 0 {
        (1, 1)
    } else {
        let per_page = u64::from(per_page);
        (
            u32::try_from(start / per_page + 1).unwrap_or(u32::MAX),
            u32::try_from(total.div_ceil(per_page)).unwrap_or(u32::MAX),
        )
    };

    Ok(Page {
        items,
        page,
        per_page,
        total_pages,
        total,
    })
}

impl FromApi for Artist {
    fn from_api(json: &Value) -> Result<Self> {
        if let Some(name) = json.as_str() {
            return Ok(Artist::new(name));
        }
        expect_object(json, "artist")?;

        let stats = json.get("stats").unwrap_or(json);

        Ok(Artist {
            name: get_text(json, "name")
                .or_else(|| get_text(json, "#text"))
                .unwrap_or_default(),
            mbid: get_text(json, "mbid"),
            url: get_text(json, "url"),
            images: extract_images(json),
            listeners: get_count(stats, "listeners")?,
            playcount: get_count(stats, "playcount")?,
            match_score: get_float(json, "match")?,
            streamable: get_bool(json, "streamable"),
            tags: parse_list(nested_list(json, "tags", "tag"))?,
            similar: parse_list(nested_list(json, "similar", "artist"))?,
            bio: extract_wiki(json, "bio"),
        })
    }
}

impl FromApi for Tag {
    fn from_api(json: &Value) -> Result<Self> {
        if let Some(name) = json.as_str() {
            return Ok(Tag::new(name));
        }
        expect_object(json, "tag")?;

        Ok(Tag {
            name: get_str(json, "name"),
            url: get_text(json, "url"),
            count: get_count(json, "count")?,
            reach: get_count(json, "reach")?,
            taggings: match json.get("taggings") {
                Some(_) => get_count(json, "taggings")?,
                None => get_count(json, "total")?,
            },
            wiki: extract_wiki(json, "wiki"),
        })
    }
}

/// Parse a nested artist field, dropping it when it has no name.
fn nested_artist(json: &Value) -> Result<Option<Artist>> {
    match json.get("artist") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let artist = Artist::from_api(value)?;
            Ok(Some(artist).filter(|a| !a.name.is_empty()))
        }
    }
}

impl FromApi for Album {
    fn from_api(json: &Value) -> Result<Self> {
        if let Some(name) = json.as_str() {
            return Ok(Album {
                name: name.to_string(),
                ..Default::default()
            });
        }
        expect_object(json, "album")?;

        Ok(Album {
            name: get_text(json, "name")
                .or_else(|| get_text(json, "title"))
                .or_else(|| get_text(json, "#text"))
                .unwrap_or_default(),
            artist: nested_artist(json)?,
            mbid: get_text(json, "mbid"),
            url: get_text(json, "url"),
            images: extract_images(json),
            listeners: get_count(json, "listeners")?,
            playcount: get_count(json, "playcount")?,
            tracks: parse_list(nested_list(json, "tracks", "track"))?,
            tags: parse_list(nested_list(json, "tags", "tag"))?,
            wiki: extract_wiki(json, "wiki"),
        })
    }
}

impl FromApi for Track {
    fn from_api(json: &Value) -> Result<Self> {
        expect_object(json, "track")?;

        let album = match json.get("album") {
            None | Some(Value::Null) => None,
            Some(value) => Some(Album::from_api(value)?).filter(|a| !a.name.is_empty()),
        };

        let tags = match json.get("toptags") {
            Some(_) => parse_list(nested_list(json, "toptags", "tag"))?,
            None => parse_list(nested_list(json, "tags", "tag"))?,
        };

        let played_at = match json.get("date") {
            Some(date) if date.is_object() => get_timestamp(date, "uts")?,
            _ => None,
        };

        let rank = match attr(json).get("rank") {
            Some(_) => Some(get_u32(attr(json), "rank")?),
            None => None,
        };

        let user_playcount = match json.get("userplaycount") {
            Some(_) => Some(get_count(json, "userplaycount")?),
            None => None,
        };

        Ok(Track {
            name: get_str(json, "name"),
            artist: nested_artist(json)?,
            album: album.map(Box::new),
            mbid: get_text(json, "mbid"),
            url: get_text(json, "url"),
            duration: get_u32(json, "duration")?,
            listeners: get_count(json, "listeners")?,
            playcount: get_count(json, "playcount")?,
            user_playcount,
            loved: get_bool(json, "userloved") || get_bool(json, "loved"),
            rank,
            played_at,
            now_playing: get_bool(attr(json), "nowplaying"),
            images: extract_images(json),
            tags,
            wiki: extract_wiki(json, "wiki"),
        })
    }
}

impl FromApi for User {
    fn from_api(json: &Value) -> Result<Self> {
        expect_object(json, "user")?;

        let registered = match json.get("registered") {
            Some(reg @ Value::Object(obj)) if obj.contains_key("unixtime") => {
                get_timestamp(reg, "unixtime")?
            }
            Some(_) => get_timestamp(json, "registered")?,
            None => None,
        };

        Ok(User {
            name: get_str(json, "name"),
            realname: get_text(json, "realname"),
            url: get_text(json, "url"),
            country: get_text(json, "country").filter(|c| c != "None"),
            age: get_u32(json, "age")?,
            playcount: get_count(json, "playcount")?,
            playlists: get_u32(json, "playlists")?,
            subscriber: get_bool(json, "subscriber"),
            registered,
            images: extract_images(json),
        })
    }
}

impl FromApi for Session {
    fn from_api(json: &Value) -> Result<Self> {
        expect_object(json, "session")?;
        let key = get_text(json, "key")
            .ok_or_else(|| LastfmError::InvalidPayload("session has no key".to_string()))?;

        Ok(Session {
            name: get_str(json, "name"),
            key,
            subscriber: i32::from(get_bool(json, "subscriber")),
        })
    }
}

impl FromApi for Location {
    fn from_api(json: &Value) -> Result<Self> {
        let point = json.get("geo:point").unwrap_or(&Value::Null);
        Ok(Location {
            city: get_text(json, "city"),
            country: get_text(json, "country"),
            street: get_text(json, "street"),
            postal_code: get_text(json, "postalcode"),
            latitude: get_float(point, "geo:lat")?,
            longitude: get_float(point, "geo:long")?,
        })
    }
}

impl FromApi for Venue {
    fn from_api(json: &Value) -> Result<Self> {
        expect_object(json, "venue")?;
        Ok(Venue {
            id: get_text(json, "id"),
            name: get_str(json, "name"),
            location: match json.get("location") {
                Some(loc) if loc.is_object() => Location::from_api(loc)?,
                _ => Location::default(),
            },
            url: get_text(json, "url"),
            website: get_text(json, "website"),
        })
    }
}

impl FromApi for Event {
    fn from_api(json: &Value) -> Result<Self> {
        expect_object(json, "event")?;

        let artists_json = json.get("artists").unwrap_or(&Value::Null);
        let venue = match json.get("venue") {
            Some(v) if v.is_object() => Some(Venue::from_api(v)?),
            _ => None,
        };

        Ok(Event {
            id: get_str(json, "id"),
            title: get_str(json, "title"),
            artists: one_or_many(artists_json, "artist")
                .into_iter()
                .filter_map(as_text)
                .collect(),
            headliner: get_text(artists_json, "headliner"),
            venue,
            start_date: get_text(json, "startDate"),
            description: get_text(json, "description"),
            attendance: get_u32(json, "attendance")?,
            reviews: get_u32(json, "reviews")?,
            url: get_text(json, "url"),
            website: get_text(json, "website"),
            cancelled: get_bool(json, "cancelled"),
            tags: nested_list(json, "tags", "tag")
                .into_iter()
                .filter_map(as_text)
                .collect(),
            images: extract_images(json),
        })
    }
}

impl FromApi for WeeklyChart {
    fn from_api(json: &Value) -> Result<Self> {
        Ok(WeeklyChart {
            from: get_timestamp(json, "from")?.unwrap_or(0),
            to: get_timestamp(json, "to")?.unwrap_or(0),
        })
    }
}

impl FromApi for ScrobbleResult {
    fn from_api(json: &Value) -> Result<Self> {
        let header = attr(json);
        Ok(ScrobbleResult {
            accepted: get_u32(header, "accepted")?,
            ignored: get_u32(header, "ignored")?,
        })
    }
}
