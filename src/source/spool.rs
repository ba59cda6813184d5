//! Local spool mail source: one directory of `.eml` files per account address.

use super::{FetchRequest, MailSource, RetrievedEmail, SourceError};
use crate::util::{collect_headers, extract_bodies};
use async_trait::async_trait;
use chrono::DateTime;
use mailparse::parse_mail;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads `<root>/<email>/*.eml`. Without a root it never yields messages.
#[derive(Debug, Clone)]
pub struct SpoolSource {
    root: Option<PathBuf>,
}

impl SpoolSource {
    pub fn new(root: Option<PathBuf>) -> Self {
        SpoolSource { root }
    }

    pub fn empty() -> Self {
        SpoolSource { root: None }
    }
}

#[async_trait]
impl MailSource for SpoolSource {
    async fn fetch(&self, req: &FetchRequest) -> Result<Vec<RetrievedEmail>, SourceError> {
        let Some(root) = &self.root else {
            return Ok(Vec::new());
        };
        if req.email.is_empty()
            || req.email.contains(['/', '\\'])
            || req.email.starts_with('.')
        {
            return Err(SourceError::InvalidAccount(req.email.clone()));
        }

        let dir = root.join(&req.email);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no spool directory for {}", req.email);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("eml")) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut out = Vec::with_capacity(paths.len());
        for path in paths {
            let raw = tokio::fs::read(&path).await?;
            out.push(parse_spooled(&path, &raw)?);
        }
        debug!("spool yielded {} message(s) for {}", out.len(), req.email);
        Ok(out)
    }
}

fn parse_spooled(path: &Path, raw: &[u8]) -> Result<RetrievedEmail, SourceError> {
    let parsed = parse_mail(raw).map_err(|e| SourceError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let headers = collect_headers(&parsed);
    let (text, html) = extract_bodies(&parsed);

    let message_id = headers
        .get("message-id")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_default();
    let date = headers
        .get("date")
        .and_then(|d| mailparse::dateparse(d).ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0));

    Ok(RetrievedEmail {
        message_id,
        subject: headers.get("subject").cloned(),
        sender: headers.get("from").cloned(),
        body: text.or(html),
        date,
        headers,
    })
}
