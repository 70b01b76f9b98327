//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Get and parse an environment variable, using `default` when it is unset.
///
/// A variable that is set but unparsable is still an error, so typos are not
/// silently replaced by the default.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

/// Read a `1`/`0` style flag (`true`/`false`, `yes`/`no` also accepted).
pub fn get_env_flag(name: &'static str, default: bool) -> bool {
    match get_env(name) {
        Ok(val) => matches!(
            val.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name; the process environment is shared.

    #[test]
    fn test_missing_env_uses_default() {
        let val: f32 = get_env_parse_or("LIB_UTILS_TEST_UNSET_F32", 1.5).unwrap();
        assert_eq!(val, 1.5);
    }

    #[test]
    fn test_parse_env_value() {
        env::set_var("LIB_UTILS_TEST_PARSE", " 42 ");
        let val: u64 = get_env_parse("LIB_UTILS_TEST_PARSE").unwrap();
        assert_eq!(val, 42);
    }

    #[test]
    fn test_wrong_format_is_not_defaulted() {
        env::set_var("LIB_UTILS_TEST_BAD", "abc");
        let res: Result<f32, _> = get_env_parse_or("LIB_UTILS_TEST_BAD", 2.0);
        assert_eq!(res, Err(Error::WrongFormat("LIB_UTILS_TEST_BAD")));
    }

    #[test]
    fn test_env_flag() {
        env::set_var("LIB_UTILS_TEST_FLAG_ON", "1");
        env::set_var("LIB_UTILS_TEST_FLAG_OFF", "0");
        assert!(get_env_flag("LIB_UTILS_TEST_FLAG_ON", false));
        assert!(!get_env_flag("LIB_UTILS_TEST_FLAG_OFF", true));
        assert!(get_env_flag("LIB_UTILS_TEST_FLAG_UNSET", true));
    }
}
