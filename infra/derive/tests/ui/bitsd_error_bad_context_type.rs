use bitsd_derive::bitsd_error;

#[bitsd_error]
pub enum ReadError {
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<String>,
    },
}

fn main() {}
