#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid float literal ({0})")]
    ParseFloat(#[from] core::num::ParseFloatError),

    #[error("{0} is not exactly representable in e4m3fn")]
    Inexact(f32),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}
