//! Choosing the initial locale from a request parameter.

/// Query parameter carrying the requested locale.
pub const LANG_PARAM: &str = "lang";

/// Value of the `lang` parameter in a raw query string such as
/// `?lang=en&page=2`. Empty values count as absent.
pub fn lang_from_query(query: &str) -> Option<&str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == LANG_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// `requested` if it is one of `allowed`, otherwise `fallback`.
pub fn select_initial_locale<I, S>(requested: Option<&str>, allowed: I, fallback: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    requested
        .filter(|requested| allowed.into_iter().any(|id| id.as_ref() == *requested))
        .unwrap_or(fallback)
        .to_string()
}
