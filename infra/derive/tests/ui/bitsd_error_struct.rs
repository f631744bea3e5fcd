use bitsd_derive::bitsd_error;

#[bitsd_error]
pub struct ReadError {
    message: String,
}

fn main() {}
