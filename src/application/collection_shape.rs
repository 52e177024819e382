//! Decoding of the link listing body.
//!
//! The listing endpoint has returned several body shapes over time. Detection is
//! an explicit step producing one of three named shapes, with everything else
//! falling back to an empty collection rather than an error.

use serde_json::{Map, Value};

use crate::domain::entities::{LinkCollection, ShortenedLink};

/// Wrapper fields probed, in order, for an embedded link sequence.
pub const COLLECTION_FIELDS: [&str; 3] = ["urls", "links", "data"];

/// Identifier fields accepted on keyed-mapping entries.
const ID_FIELDS: [&str; 2] = ["id", "_id"];

/// The recognised shapes of a listing body.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionShape {
    /// `{"urls": [...]}` - a wrapper object with a sequence field.
    CollectionField(Vec<Value>),
    /// `[...]` - the body is the sequence itself.
    BareSequence(Vec<Value>),
    /// `{"0": {...}, "1": {...}}` - only object values carrying an id are kept.
    KeyedMapping(Vec<Value>),
    /// Anything else (strings, numbers, null).
    Unrecognized,
}

impl CollectionShape {
    pub fn detect(body: Value) -> Self {
        match body {
            Value::Object(mut map) => {
                let field = COLLECTION_FIELDS
                    .iter()
                    .find(|field| matches!(map.get(**field), Some(Value::Array(_))));

                let embedded = field.and_then(|field| map.remove(*field));
                match embedded {
                    Some(Value::Array(items)) => Self::CollectionField(items),
                    _ => Self::KeyedMapping(identified_values(map)),
                }
            }
            Value::Array(items) => Self::BareSequence(items),
            _ => Self::Unrecognized,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CollectionField(_) => "collection_field",
            Self::BareSequence(_) => "bare_sequence",
            Self::KeyedMapping(_) => "keyed_mapping",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Turns the detected items into links.
    ///
    /// Items that do not decode as a [`ShortenedLink`] are dropped with a warning.
    pub fn into_collection(self) -> LinkCollection {
        let items = match self {
            Self::CollectionField(items) | Self::BareSequence(items) | Self::KeyedMapping(items) => {
                items
            }
            Self::Unrecognized => {
                tracing::warn!("Unrecognized link listing body, using empty collection");
                return LinkCollection::empty();
            }
        };

        items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<ShortenedLink>(item) {
                Ok(link) => Some(link),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed link entry");
                    None
                }
            })
            .collect()
    }
}

/// Detects the body shape and decodes it. Never fails.
pub fn decode_collection(body: Value) -> LinkCollection {
    let shape = CollectionShape::detect(body);
    tracing::debug!(shape = shape.name(), "Decoding link listing");
    shape.into_collection()
}

fn identified_values(map: Map<String, Value>) -> Vec<Value> {
    map.into_iter()
        .filter_map(|(key, value)| {
            let has_id = value.as_object().is_some_and(|obj| {
                ID_FIELDS
                    .iter()
                    .any(|f| obj.get(*f).and_then(Value::as_str).is_some_and(|id| !id.is_empty()))
            });

            if has_id {
                Some(value)
            } else {
                tracing::debug!(key = %key, "Discarding keyed entry without identifier");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn link_json(id: &str) -> Value {
        json!({
            "id": id,
            "originalUrl": "https://example.com",
            "shortUrl": format!("s-{id}"),
            "ownerId": "u1",
            "expiryTimestamp": "2026-11-01T00:00:00Z",
            "createdTimestamp": "2026-10-01T00:00:00Z",
            "resolvedShortUrl": format!("https://sho.rt/s-{id}")
        })
    }

    #[test]
    fn test_collection_field() {
        let body = json!({ "urls": [link_json("a"), link_json("b")], "count": 2 });
        let shape = CollectionShape::detect(body);
        assert_eq!(shape.name(), "collection_field");
        assert_eq!(shape.into_collection().len(), 2);
    }

    #[test]
    fn test_alternate_collection_field() {
        let body = json!({ "success": true, "data": [link_json("a")] });
        assert!(matches!(
            CollectionShape::detect(body),
            CollectionShape::CollectionField(items) if items.len() == 1
        ));
    }

    #[test]
    fn test_non_sequence_wrapper_field_falls_through_to_mapping() {
        let body = json!({ "urls": "none", "0": link_json("a") });
        let collection = decode_collection(body);
        assert_eq!(collection.len(), 1);
        assert!(collection.get("a").is_some());
    }

    #[test]
    fn test_bare_sequence() {
        let collection = decode_collection(json!([link_json("a"), link_json("b")]));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_empty_mapping_is_empty_collection() {
        let shape = CollectionShape::detect(json!({}));
        assert_eq!(shape, CollectionShape::KeyedMapping(vec![]));
        assert!(shape.into_collection().is_empty());
    }

    #[test]
    fn test_keyed_mapping_discards_entries_without_id() {
        let body = json!({
            "0": link_json("a"),
            "note": "x",
            "meta": { "page": 1 },
            "1": { "id": "", "originalUrl": "https://example.com" }
        });
        let collection = decode_collection(body);

        assert_eq!(collection.len(), 1);
        assert!(collection.get("a").is_some());
    }

    #[test]
    fn test_keyed_mapping_accepts_underscore_id() {
        let mut entry = link_json("ignored");
        let obj = entry.as_object_mut().unwrap();
        obj.remove("id");
        obj.insert("_id".to_string(), json!("mongo-1"));

        let collection = decode_collection(json!({ "x": entry }));
        assert!(collection.get("mongo-1").is_some());
    }

    #[test]
    fn test_unrecognized_shapes() {
        for body in [json!(null), json!("links"), json!(42), json!(true)] {
            let shape = CollectionShape::detect(body);
            assert_eq!(shape, CollectionShape::Unrecognized);
            assert!(shape.into_collection().is_empty());
        }
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let body = json!([link_json("a"), { "id": "b" }, 17]);
        let collection = decode_collection(body);

        assert_eq!(collection.len(), 1);
        assert!(collection.get("a").is_some());
    }
}
