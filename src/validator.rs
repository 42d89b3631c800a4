use crate::errors::{AppError, AppResult};
use crate::models::RawCommand;
use crate::query::decode_query;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::{ParseError, Url};

/// Everything outside the characters a query may carry unescaped.
const QUERY_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Turns a raw string into a command addressed to `expected_scheme`.
pub fn parse_command(raw: &str, expected_scheme: &str) -> AppResult<RawCommand> {
    let url = parse_lenient(raw)?;

    let scheme = url.scheme();
    if scheme.is_empty() {
        return Err(AppError::MissingScheme(raw.to_string()));
    }
    if scheme != expected_scheme {
        return Err(AppError::WrongScheme(scheme.to_string()));
    }

    let verb = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| AppError::MissingCommand(raw.to_string()))?;

    Ok(RawCommand {
        scheme: scheme.to_string(),
        verb: verb.to_string(),
        parameters: decode_query(url.query().unwrap_or_default()),
    })
}

fn parse_lenient(raw: &str) -> AppResult<Url> {
    let first = match Url::parse(raw) {
        Ok(url) => return Ok(url),
        Err(error) => error,
    };

    let encoded = utf8_percent_encode(raw, QUERY_ESCAPE).to_string();
    match Url::parse(&encoded) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) if first == ParseError::RelativeUrlWithoutBase => {
            Err(AppError::MissingScheme(raw.to_string()))
        }
        Err(_) => Err(AppError::MalformedUrl(raw.to_string())),
    }
}
