//! `Authorization` header parsing.

const SCHEME: &str = "Bearer ";

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-sensitively and must be followed by exactly
/// one space. The token runs up to the next space, so `Bearer  abc` carries
/// an empty token and yields `None`.
#[must_use]
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let rest = header_value.strip_prefix(SCHEME)?;
    let token = rest.split(' ').next().unwrap_or_default();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Bearer abc123", Some("abc123"))]
    #[case("Bearer abc123 extra", Some("abc123"))]
    #[case("Bearer  abc123", None)]
    #[case("Bearer ", None)]
    #[case("Bearer", None)]
    #[case("bearer abc123", None)]
    #[case("Basic dXNlcjpwYXNz", None)]
    #[case("", None)]
    fn parses_header(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(bearer_token(header), expected);
    }
}
