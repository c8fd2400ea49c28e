#[derive(Debug)]
pub struct Error {
    pub msg: String,
    pub details: ErrorDetails,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ErrorDetails {
    // The value is not invokable as a constructor (eg. no class registered
    // under the requested name)
    InvalidDescriptor,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}
impl std::error::Error for Error {}

pub fn invalid_descriptor(msg: &str) -> Error {
    Error {
        msg: msg.to_string(),
        details: ErrorDetails::InvalidDescriptor,
    }
}
