use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::models::{Document, Kind};

pub type Payload = Result<Reply, Error>;

pub fn proceeds(reply: Reply) -> Payload {
    Ok(reply)
}

pub async fn handler404() -> Error {
    Error::EndpointNotFound
}

/// Successful outcome of a handler, keyed by the resource it concerns.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Record(Kind, Document),
    Records(Kind, Vec<Document>),
    Deleted(Kind),
}

impl Reply {
    pub fn body(self) -> Value {
        let mut body = Document::new();
        match self {
            Reply::Record(kind, record) => {
                body.insert(kind.singular().to_string(), Value::Object(record));
            }
            Reply::Records(kind, records) => {
                let records = records.into_iter().map(Value::Object).collect();
                body.insert(kind.collection().to_string(), Value::Array(records));
            }
            Reply::Deleted(kind) => {
                body.insert(
                    "message".to_string(),
                    Value::String(format!("{} deleted successfully", kind.label())),
                );
            }
        }
        Value::Object(body)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.body())).into_response()
    }
}

#[derive(Debug, Clone)]
pub enum Error {
    NotFound(Kind),
    EndpointNotFound,
    Connection { message: String },
    InternalError { kind: &'static str, message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) | Error::EndpointNotFound => StatusCode::NOT_FOUND,
            Error::Connection { .. } | Error::InternalError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message shown to the caller. Internal detail never leaves the process.
    pub fn public_message(&self) -> String {
        match self {
            Error::NotFound(kind) => format!("{} not found", kind.label()),
            Error::EndpointNotFound => "Endpoint not found".to_string(),
            Error::Connection { .. } | Error::InternalError { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    pub fn internal<S: Into<String>>(kind: &'static str, msg: S) -> Error {
        Error::InternalError {
            kind,
            message: msg.into(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Connection { message } => {
                log::error!("Storage unreachable: {}", message)
            }
            Error::InternalError { kind, message } => log::error!("{}: {}", kind, message),
            _ => {}
        }
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection {
                message: err.to_string(),
            },
            _ => Self::InternalError {
                kind: "DatabaseError",
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InternalError {
            kind: "SerializationError",
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_codes() {
        assert_eq!(Error::NotFound(Kind::Teacher).status(), StatusCode::NOT_FOUND);
        assert_eq!(Error::EndpointNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::internal("DatabaseError", "boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::from(sqlx::Error::PoolTimedOut).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_hide_internal_detail() {
        assert_eq!(
            Error::NotFound(Kind::Student).public_message(),
            "Student not found"
        );
        assert_eq!(Error::EndpointNotFound.public_message(), "Endpoint not found");
        let err = Error::Connection {
            message: "connection refused (os error 111)".to_string(),
        };
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn pool_failures_are_connection_errors() {
        assert!(matches!(
            Error::from(sqlx::Error::PoolTimedOut),
            Error::Connection { .. }
        ));
        assert!(matches!(
            Error::from(sqlx::Error::RowNotFound),
            Error::InternalError {
                kind: "DatabaseError",
                ..
            }
        ));
    }

    #[test]
    fn reply_bodies_are_keyed_by_resource() {
        let mut record = Document::new();
        record.insert("id".to_string(), json!("abc"));

        assert_eq!(
            Reply::Record(Kind::Teacher, record.clone()).body(),
            json!({ "teacher": { "id": "abc" } })
        );
        assert_eq!(
            Reply::Records(Kind::Student, vec![record]).body(),
            json!({ "students": [{ "id": "abc" }] })
        );
        assert_eq!(
            Reply::Records(Kind::Teacher, Vec::new()).body(),
            json!({ "teachers": [] })
        );
        assert_eq!(
            Reply::Deleted(Kind::Teacher).body(),
            json!({ "message": "Teacher deleted successfully" })
        );
    }
}
