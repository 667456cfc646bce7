pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
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

/// Maps a `None` produced by checked integer arithmetic to an overflow error.
#[inline]
pub fn checked<T>(value: Option<T>, context: &str) -> Result<T> {
    value.ok_or_else(|| overflow(context))
}

#[cold]
fn overflow(context: &str) -> crate::error::Error {
    crate::error::Error::arithmetic_overflow(context)
}
