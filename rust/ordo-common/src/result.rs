pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn verify_state(predicate: bool, message: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_state(message)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn invalid_state(message: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidState {
        message: message.to_string(),
    }
    .into())
}
