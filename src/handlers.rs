use axum::body::Bytes;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use serde_json::Value;

use crate::err::{proceeds, Error, Payload, Reply};
use crate::mapper::{to_new_record, to_update_patch};
use crate::models::{Document, Kind, ID};
use crate::router::{resolve, Route};
use crate::storage::{Database, Storage};

pub const API_PREFIX: &str = "/api";

/// Entry point for every `/api/*` request.
pub async fn dispatch(
    method: Method,
    uri: Uri,
    Extension(storage): Extension<Storage>,
    body: Bytes,
) -> Response {
    let path = uri.path().strip_prefix(API_PREFIX).unwrap_or("");
    match serve(&storage, &method, path, &body).await {
        Ok(reply) => reply.into_response(),
        Err(err) => err.into_response(),
    }
}

async fn serve(storage: &Storage, method: &Method, path: &str, body: &[u8]) -> Payload {
    let route = resolve(method, path)?;
    log::debug!("{} {} -> {:?}", method, path, route);

    let db = storage.connect().await?;
    match route {
        Route::List(kind) => proceeds(Reply::Records(kind, list(&db, kind).await?)),
        Route::Fetch(kind, id) => proceeds(Reply::Record(kind, get_one(&db, kind, id).await?)),
        Route::Create(kind) => {
            let record = create(&db, kind, parse_payload(body)?).await?;
            proceeds(Reply::Record(kind, record))
        }
        Route::Update(kind, id) => {
            let record = update(&db, kind, id, parse_payload(body)?).await?;
            proceeds(Reply::Record(kind, record))
        }
        Route::Delete(kind, id) => {
            delete(&db, kind, id).await?;
            proceeds(Reply::Deleted(kind))
        }
    }
}

fn parse_payload(body: &[u8]) -> Result<Document, Error> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(payload) => Ok(payload),
        other => Err(Error::internal(
            "SerializationError",
            format!("expected a JSON object, got `{}`", other),
        )),
    }
}

fn record_id(record: &Document) -> &str {
    record.get(ID).and_then(Value::as_str).unwrap_or_default()
}

pub async fn list(db: &Database, kind: Kind) -> Result<Vec<Document>, Error> {
    db.collection(kind.collection()).find_all().await
}

pub async fn get_one(db: &Database, kind: Kind, id: &str) -> Result<Document, Error> {
    db.collection(kind.collection())
        .find_one(id)
        .await?
        .ok_or(Error::NotFound(kind))
}

pub async fn create(db: &Database, kind: Kind, payload: Document) -> Result<Document, Error> {
    let record = to_new_record(&payload, kind);
    db.collection(kind.collection()).insert_one(&record).await?;
    log::info!("Created {} {}", kind.singular(), record_id(&record));
    Ok(record)
}

/// Merges the writable fields of `payload` into an existing record.
/// Nothing is written when no record has this id.
pub async fn update(
    db: &Database,
    kind: Kind,
    id: &str,
    payload: Document,
) -> Result<Document, Error> {
    let patch = to_update_patch(&payload, kind);
    db.collection(kind.collection())
        .update_one(id, &patch)
        .await?
        .ok_or(Error::NotFound(kind))
}

pub async fn delete(db: &Database, kind: Kind, id: &str) -> Result<(), Error> {
    if db.collection(kind.collection()).delete_one(id).await? {
        log::info!("Deleted {} {}", kind.singular(), id);
        Ok(())
    } else {
        Err(Error::NotFound(kind))
    }
}
