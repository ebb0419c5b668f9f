//! Request-level rules shared by the handlers: body validation and partial updates.

mod patch;
mod validation;
pub use patch::{apply, Fields, Patch};
pub use validation::{
    bounded_text, decode, decode_or, non_empty_name, optional_bounded_text, parse_timestamp, timestamp_field,
    RequestValidator, NAME_MAX_LEN, SHORT_TEXT_MAX_LEN,
};
