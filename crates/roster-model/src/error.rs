use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("unknown role '{0}' (expected one of: name, city, state, phone, email, website, zip_code)")]
    UnknownRole(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
