use std::borrow::Cow;

use serde::Serialize;

pub mod contact;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: Cow<'static, str>,
}
