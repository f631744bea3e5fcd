use bitsd_derive::bitsd_error;
use std::borrow::Cow;

#[bitsd_error]
pub enum ReadError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Bad field `{field}`{}", format_context(.context))]
    Field { field: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<(), ReadError> {
    let io: Result<(), std::io::Error> = Err(std::io::Error::other("gone"));
    io.context("opening record file")
}

fn main() {
    let err = open().unwrap_err();
    assert_eq!(err.context_str(), Some("opening record file"));
    assert_eq!(err.to_string(), "IO error (opening record file): gone");

    let field: Result<(), ReadError> =
        Err(ReadError::Field { field: "value".into(), context: None });
    let err = field.context("record 3").unwrap_err();
    assert_eq!(err.to_string(), "Bad field `value` (record 3)");

    let internal: ReadError = "boom".into();
    assert!(internal.context_str().is_none());
}
