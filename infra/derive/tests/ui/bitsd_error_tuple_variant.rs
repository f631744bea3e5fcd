use bitsd_derive::bitsd_error;

#[bitsd_error]
pub enum ReadError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

fn main() {}
