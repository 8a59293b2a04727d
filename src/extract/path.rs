//! Path parameter extractor rejecting with [AppError].

use crate::error::AppError;
use axum::extract::FromRequestParts;

/// [axum::extract::Path] whose rejections render as JSON:API errors.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
