//! Utility functions: tracing and mail parsing.

use mailparse::{MailHeaderMap, ParsedMail};
use std::collections::HashMap;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize pretty CLI logging.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .init();
}

/// Collect headers into a lowercase HashMap. The first occurrence of a header wins.
pub fn collect_headers(parsed: &ParsedMail<'_>) -> HashMap<String, String> {
  let mut map = HashMap::new();
  for h in &parsed.headers {
    map
      .entry(h.get_key().to_ascii_lowercase())
      .or_insert_with(|| h.get_value());
  }
  map
}

/// Extract first text and HTML bodies from a MIME tree. Attachments are skipped.
pub fn extract_bodies(parsed: &ParsedMail<'_>) -> (Option<String>, Option<String>) {
  if parsed.subparts.is_empty() {
    let disposition = parsed
      .headers
      .get_first_value("Content-Disposition")
      .unwrap_or_default();
    if disposition.to_ascii_lowercase().starts_with("attachment") {
      return (None, None);
    }
    let data = parsed.get_body().unwrap_or_default();
    match parsed.ctype.mimetype.as_str() {
      "text/html" => (None, Some(data)),
      "text/plain" => (Some(data), None),
      _ => (None, None),
    }
  } else {
    let mut text = None;
    let mut html = None;
    for part in &parsed.subparts {
      let (t, h) = extract_bodies(part);
      if text.is_none() && t.is_some() {
        text = t;
      }
      if html.is_none() && h.is_some() {
        html = h;
      }
    }
    (text, html)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use mailparse::parse_mail;

  #[test]
  fn headers_are_lowercased_and_first_wins() {
    let parsed = parse_mail(b"Subject: one\r\nSUBJECT: two\r\nX-Tag: a\r\n\r\nbody").unwrap();
    let headers = collect_headers(&parsed);
    assert_eq!(headers.get("subject").map(String::as_str), Some("one"));
    assert_eq!(headers.get("x-tag").map(String::as_str), Some("a"));
  }

  #[test]
  fn multipart_bodies_skip_attachments() {
    let eml = concat!(
      "Subject: mixed\r\n",
      "MIME-Version: 1.0\r\n",
      "Content-Type: multipart/mixed; boundary=BOUND\r\n",
      "\r\n",
      "--BOUND\r\n",
      "Content-Type: text/plain\r\n",
      "Content-Disposition: attachment; filename=\"notes.txt\"\r\n\r\n",
      "attached notes\r\n",
      "--BOUND\r\n",
      "Content-Type: text/plain\r\n\r\n",
      "real body\r\n",
      "--BOUND\r\n",
      "Content-Type: text/html\r\n\r\n",
      "<p>real body</p>\r\n",
      "--BOUND--\r\n",
    );
    let parsed = parse_mail(eml.as_bytes()).unwrap();
    let (text, html) = extract_bodies(&parsed);
    assert!(text.unwrap().contains("real body"));
    assert!(html.unwrap().contains("<p>real body</p>"));
  }
}
