use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref NICKNAME_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Za-z0-9_\-가-힣]+$").unwrap();
}

/// Display name shown on posts and comments. 2..=20 chars, letters, digits,
/// underscore, dash, hangul.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Nickname {
    #[validate(length(min = 2, max = 20), regex(path = *NICKNAME_REGEX))]
    pub value: String,
}

impl Nickname {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let nickname = Self { value };
        nickname.validate()?;
        Ok(nickname)
    }
}
