use serde::{Deserialize, Serialize};

/// One EPIC natural-color image entry.
///
/// `image` is a bare filename token (no extension); `date` is an upstream
/// timestamp string like `2015-10-31 00:36:33`, passed through untouched.
#[derive(Serialize, Deserialize)]
pub struct EpicImageRecord {
    pub image: String,

    pub caption: String,

    pub date: String,
}
