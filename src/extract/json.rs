//! JSON body extractor rejecting with [AppError].

use crate::error::AppError;
use axum::extract::FromRequest;

/// [axum::Json] whose rejections render as JSON:API errors.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
