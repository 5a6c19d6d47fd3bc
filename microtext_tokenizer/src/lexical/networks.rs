//! Whole-span pattern recognizers for e-mail addresses, URLs and filenames
//!
//! Patterns are compiled once per process and matched as prefixes of the
//! remaining input.

use crate::tokens::TokenType;
use regex::Regex;
use std::sync::OnceLock;

const TOP_LEVEL_DOMAINS: &str = "com|edu|org|net|gov|mil|co|us";

const FILE_EXTENSIONS: &str = "aiff?|au|avi|bat|bmp|class|csv|cvs|dbf|dif|docx?|eps|exe|fm3|gif|hqx\
    |html?|java|jpeg|jpg|mac|map|mdb|midi|mid|mov|mtb|mtw|pdf|png|pptx|ppt|psd|psp|qt|qxd|ra|rtf\
    |sit|tar|tif|txt|wav|xlsx|xls|zip";

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static URL_PATTERN: OnceLock<Regex> = OnceLock::new();
static FILENAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn domain() -> String {
    format!(r"([A-Za-z0-9-]+\.)+({})", TOP_LEVEL_DOMAINS)
}

// The fixed patterns below are known to compile; a failure here is a defect
// in the pattern text itself.
fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(e) => panic!("invalid built-in pattern {}: {}", pattern, e),
    }
}

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        compile(&format!(
            r"^[a-zA-Z0-9!#$%&'*+/=?^_`{{|}}~-][a-zA-Z0-9.!#$%&'*+/=?^_`{{|}}~-]*@{}",
            domain()
        ))
    })
}

fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| {
        compile(&format!(
            r"^((http|https|mailto|ftp)://)?{}\S*",
            domain()
        ))
    })
}

fn filename_pattern() -> &'static Regex {
    FILENAME_PATTERN.get_or_init(|| compile(&format!(r"(?i)^\S+\.({})", FILE_EXTENSIONS)))
}

/// A pattern hit at the current scan position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkMatch {
    pub token_type: TokenType,
    /// Length of the matched span in characters
    pub char_len: usize,
}

fn prefix_len<'t>(regex: &Regex, text: &'t str) -> Option<&'t str> {
    regex.find(text).map(|m| &text[..m.end()])
}

pub fn match_email(text: &str) -> Option<&str> {
    prefix_len(email_pattern(), text)
}

/// URL prefix of `text`, without a single trailing period
pub fn match_url(text: &str) -> Option<&str> {
    prefix_len(url_pattern(), text).map(|url| url.strip_suffix('.').unwrap_or(url))
}

pub fn match_filename(text: &str) -> Option<&str> {
    prefix_len(filename_pattern(), text)
}

/// Try e-mail, URL and filename recognizers in that order against the start of `text`
pub fn match_at(text: &str) -> Option<NetworkMatch> {
    let recognizers: [(TokenType, fn(&str) -> Option<&str>); 3] = [
        (TokenType::EmailAddr, match_email),
        (TokenType::Url, match_url),
        (TokenType::Filename, match_filename),
    ];

    recognizers.iter().find_map(|(token_type, recognize)| {
        recognize(text)
            .filter(|m| !m.is_empty())
            .map(|m| NetworkMatch {
                token_type: *token_type,
                char_len: m.chars().count(),
            })
    })
}

/// Compile every pattern now rather than on first use
pub fn warm_up() {
    email_pattern();
    url_pattern();
    filename_pattern();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_addresses() {
        assert_eq!(match_email("somebody@example.com"), Some("somebody@example.com"));
        assert_eq!(
            match_email("somebody@host.example.com with more"),
            Some("somebody@host.example.com")
        );
        assert_eq!(match_email("henderson453@yahoo.com."), Some("henderson453@yahoo.com"));
        assert_eq!(match_email("first.last@agency.gov"), Some("first.last@agency.gov"));
        assert_eq!(match_email(".dot@example.com"), None);
        assert_eq!(match_email("@kdent"), None);
        assert_eq!(match_email("http://www.x.com"), None);
    }

    #[test]
    fn test_urls() {
        assert_eq!(match_url("WSJ.com"), Some("WSJ.com"));
        assert_eq!(match_url("www.oceana.org is"), Some("www.oceana.org"));
        assert_eq!(
            match_url("http://www.gooddeals.com/asdf/asdfh.php. Act now!"),
            Some("http://www.gooddeals.com/asdf/asdfh.php")
        );
        assert_eq!(
            match_url("http://www.phonescoop.com/phones/compare.php?p=4075,3801,3217"),
            Some("http://www.phonescoop.com/phones/compare.php?p=4075,3801,3217")
        );
        assert_eq!(match_url("http://t.co/a7DnygTH"), Some("http://t.co/a7DnygTH"));
        assert_eq!(match_url("D.H. Lawrence"), None);
        assert_eq!(match_url("34.50"), None);
        assert_eq!(match_url("hello world"), None);
    }

    #[test]
    fn test_filenames() {
        assert_eq!(match_filename("testpage.pdf"), Some("testpage.pdf"));
        assert_eq!(match_filename("testpage.html is"), Some("testpage.html"));
        assert_eq!(match_filename("testpage.htm is"), Some("testpage.htm"));
        assert_eq!(match_filename("REPORT.PDF"), Some("REPORT.PDF"));
        assert_eq!(
            match_filename("/Users/kdent/Documents/speech_rfp.docx"),
            Some("/Users/kdent/Documents/speech_rfp.docx")
        );
        assert_eq!(match_filename("notes.md"), None);
        assert_eq!(match_filename("a .pdf"), None);
    }

    #[test]
    fn test_priority_order() {
        let hit = match_at("somebody@example.com").unwrap();
        assert_eq!(hit.token_type, TokenType::EmailAddr);

        let hit = match_at("www.parc.com/XLE.html").unwrap();
        assert_eq!(hit.token_type, TokenType::Url);
        assert_eq!(hit.char_len, 21);

        let hit = match_at("résumé.pdf").unwrap();
        assert_eq!(hit.token_type, TokenType::Filename);
        assert_eq!(hit.char_len, 10);

        assert!(match_at("plain words").is_none());
    }
}
