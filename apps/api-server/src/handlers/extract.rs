//! Request body extraction.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::middleware::error::AppError;

/// JSON body that reads as `T::default()` when the request carries no JSON.
///
/// A body without a JSON content type, or an empty one, is treated as `{}`
/// so the handler reports the missing fields itself. A JSON body that does
/// not parse answers `400 {message}`.
pub struct LenientJson<T>(pub T);

impl<T> LenientJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn is_json(content_type: &str) -> bool {
    content_type.eq_ignore_ascii_case("application/json")
        || content_type.to_ascii_lowercase().ends_with("+json")
}

impl<T> FromRequest for LenientJson<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = is_json(req.content_type());
        let body = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = body.await?;
            if !json || bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(LenientJson(T::default()));
            }

            serde_json::from_slice(&bytes)
                .map(LenientJson)
                .map_err(|e| actix_web::Error::from(AppError::BadRequest(e.to_string())))
        })
    }
}
