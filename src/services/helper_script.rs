use tera::{Context, Tera};
use url::Url;

const TEMPLATE_NAME: &str = "j_helper.py";
const TEMPLATE: &str = include_str!("../../resources/j_helper.py.tera");

/// The downloadable notebook snippet. Parsed once, rendered per request with the
/// caller's own `/chat` URL as the only substitution.
pub struct HelperScript {
    tera: Tera,
}

impl HelperScript {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, chat_url: &Url) -> Result<String, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("chat_url", chat_url.as_str());
        self.tera.render(TEMPLATE_NAME, &ctx)
    }
}

/// Hostnames, IPv4, bracketed IPv6 and a port. Anything else could escape the
/// string literal in the rendered snippet.
fn is_plain_authority(authority: &str) -> bool {
    !authority.is_empty()
        && authority
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':' | '[' | ']'))
}

/// Builds `{scheme}://{authority}/chat` from what the client used to reach us.
pub fn resolve_chat_url(scheme: &str, authority: &str) -> Result<Url, url::ParseError> {
    let authority = authority.trim();
    if !is_plain_authority(authority) {
        return Err(url::ParseError::InvalidDomainCharacter);
    }
    let base = Url::parse(&format!("{}://{}/", scheme, authority))?;
    base.join("chat")
}
