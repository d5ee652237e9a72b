use crate::error::CtIntError;

pub type CtResult<T> = Result<T, CtIntError>;
