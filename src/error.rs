use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum DecodeError {
    MissingField {
        field: &'static str,
    },
    InvalidNumber {
        field: &'static str,
        value: String,
    },
    InvalidTimestamp {
        value: String,
    },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Missing field '{field}'"),
            Self::InvalidNumber { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            Self::InvalidTimestamp { value } => write!(f, "Invalid timestamp '{value}'"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<DecodeError> for JsValue {
    fn from(e: DecodeError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
