use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{Document, Kind, CREATED_AT, ID, UPDATED_AT};

fn timestamp(at: DateTime<Utc>) -> Value {
    Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn copy_known(payload: &Document, kind: Kind, into: &mut Document) {
    for field in kind.fields() {
        if let Some(value) = payload.get(*field) {
            into.insert((*field).to_string(), value.clone());
        }
    }
}

/// Builds the document persisted on create.
///
/// A fresh v4 `id` is generated, the known fields of `kind` are copied from
/// `payload` (absent fields stay absent, unknown ones are dropped) and both
/// timestamps are set from the same clock read.
pub fn to_new_record(payload: &Document, kind: Kind) -> Document {
    let now = timestamp(Utc::now());
    let mut record = Document::new();
    record.insert(ID.to_string(), Value::String(Uuid::new_v4().to_string()));
    copy_known(payload, kind, &mut record);
    record.insert(CREATED_AT.to_string(), now.clone());
    record.insert(UPDATED_AT.to_string(), now);
    record
}

/// Builds the patch merged into an existing document on update.
///
/// Only the writable fields of `kind` survive, so `id` and `createdAt` can't
/// be overwritten by a client. `updatedAt` is always refreshed.
pub fn to_update_patch(payload: &Document, kind: Kind) -> Document {
    let mut patch = Document::new();
    copy_known(payload, kind, &mut patch);
    patch.insert(UPDATED_AT.to_string(), timestamp(Utc::now()));
    patch
}
