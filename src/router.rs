use axum::http::Method;

use crate::err::Error;
use crate::models::Kind;

/// A resolved request: which handler to run, for which kind, on which record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    List(Kind),
    Fetch(Kind, &'a str),
    Create(Kind),
    Update(Kind, &'a str),
    Delete(Kind, &'a str),
}

/// Resolves a path relative to the API prefix, e.g. `teachers/42`.
///
/// Pure: never touches storage. Empty segments are skipped, anything
/// other than `<resource>` or `<resource>/<id>` is `EndpointNotFound`.
pub fn resolve<'a>(method: &Method, path: &'a str) -> Result<Route<'a>, Error> {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());

    let kind = segments
        .next()
        .and_then(Kind::from_resource)
        .ok_or(Error::EndpointNotFound)?;
    let id = segments.next();
    if segments.next().is_some() {
        return Err(Error::EndpointNotFound);
    }

    let route = match (method, id) {
        (&Method::GET, None) => Route::List(kind),
        (&Method::GET, Some(id)) => Route::Fetch(kind, id),
        (&Method::POST, None) => Route::Create(kind),
        (&Method::PUT, Some(id)) => Route::Update(kind, id),
        (&Method::DELETE, Some(id)) => Route::Delete(kind, id),
        _ => return Err(Error::EndpointNotFound),
    };
    Ok(route)
}
