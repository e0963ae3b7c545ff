use mongodb::bson::{Bson, Document};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

/// Wire form of a stored record: the document's fields with every ObjectId,
/// including those of embedded items, as a 24-character hex string.
pub fn wire_record(document: Document) -> Value {
    wire_value(Bson::Document(document))
}

fn wire_value(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::Document(document) => Value::Object(
            document
                .into_iter()
                .map(|(key, value)| (key, wire_value(value)))
                .collect::<Map<_, _>>(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(wire_value).collect()),
        Bson::Double(n) => Number::from_f64(n).map_or(Value::Null, Value::Number),
        Bson::Int32(n) => Value::from(n),
        Bson::Int64(n) => Value::from(n),
        Bson::String(s) => Value::String(s),
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Null => Value::Null,
        other => other.into_relaxed_extjson(),
    }
}

/// Decode a bulk-create body, which is either one record or an array of them.
///
/// The whole batch is decoded before anything is written, so a single bad
/// element rejects the request.
pub fn decode_batch<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, serde_json::Error> {
    match body {
        Value::Array(items) => items.into_iter().map(serde_json::from_value).collect(),
        single => serde_json::from_value(single).map(|record| vec![record]),
    }
}
