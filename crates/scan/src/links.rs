//! Image link extraction from Markdown documents

use assetsweep_config::constants::EXTERNAL_LINK_PREFIX;
use assetsweep_config::ScanConfig;
use assetsweep_errors::ScanError;
use assetsweep_platform::join_clean;
use percent_encoding::percent_decode_str;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Compiled link and file-name patterns for one run
#[derive(Debug, Clone)]
pub struct LinkMatcher {
    embed: Regex,
    wiki: Option<Regex>,
    image_name: Regex,
    ignore_case: bool,
    decode: bool,
}

impl LinkMatcher {
    /// Compile the patterns described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the extension list produces an invalid pattern.
    pub fn new(config: &ScanConfig) -> Result<Self, ScanError> {
        if config.image_extensions.is_empty() {
            return Err(ScanError::InvalidPattern {
                message: "no image extensions".to_string(),
            });
        }
        let exts = config
            .image_extensions
            .iter()
            .map(|ext| regex::escape(ext))
            .collect::<Vec<_>>()
            .join("|");

        let build = |pattern: String| {
            RegexBuilder::new(&pattern)
                .case_insensitive(config.ignore_case)
                .build()
                .map_err(|e| ScanError::InvalidPattern {
                    message: e.to_string(),
                })
        };

        let embed = build(format!(r"!\[.*?\]\((.*?\.(?:{exts}))\)"))?;
        let wiki = if config.wiki_links {
            Some(build(format!(r"!\[\[(.*?\.(?:{exts}))\]\]"))?)
        } else {
            None
        };
        let image_name = build(format!(r"\.(?:{exts})$"))?;

        Ok(Self {
            embed,
            wiki,
            image_name,
            ignore_case: config.ignore_case,
            decode: config.decode_links,
        })
    }

    /// Links embedded in one line, external ones removed, in match order
    ///
    /// Markdown embeds come first, then wiki embeds when enabled.
    #[must_use]
    pub fn links_in_line(&self, line: &str) -> Vec<String> {
        let wiki = self.wiki.iter().flat_map(|re| re.captures_iter(line));
        self.embed
            .captures_iter(line)
            .chain(wiki)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|link| !self.is_external(link))
            .map(|link| {
                if self.decode {
                    percent_decode(link)
                } else {
                    link.to_string()
                }
            })
            .collect()
    }

    /// Whether a file name carries one of the image extensions
    #[must_use]
    pub fn is_image_name(&self, name: &str) -> bool {
        self.image_name.is_match(name)
    }

    fn is_external(&self, link: &str) -> bool {
        if self.ignore_case {
            link.get(..EXTERNAL_LINK_PREFIX.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(EXTERNAL_LINK_PREFIX))
        } else {
            link.starts_with(EXTERNAL_LINK_PREFIX)
        }
    }
}

/// Append every image path `document` references to `into`
///
/// Links are resolved against the document's directory. An unreadable
/// document is logged, contributes nothing and yields `None`; a read error
/// midway keeps the links found so far. Otherwise returns the number of paths
/// appended.
pub fn extract_links(
    matcher: &LinkMatcher,
    document: &Path,
    into: &mut Vec<PathBuf>,
) -> Option<usize> {
    let file = match File::open(document) {
        Ok(file) => file,
        Err(e) => {
            let err = ScanError::unreadable(&e, document);
            warn!(document = %document.display(), error = %err, "skipping document");
            return None;
        }
    };

    let dir = document.parent().unwrap_or_else(|| Path::new("."));
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let before = into.len();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                for link in matcher.links_in_line(&line) {
                    into.push(join_clean(dir, Path::new(&link)));
                }
            }
            Err(e) => {
                let err = ScanError::unreadable(&e, document);
                warn!(document = %document.display(), error = %err, "stopped reading document");
                break;
            }
        }
    }

    let found = into.len() - before;
    debug!(document = %document.display(), links = found, "scanned document");
    Some(found)
}

/// Decode `%XX` escapes; malformed escapes stay verbatim and a non-UTF-8
/// result keeps the input
fn percent_decode(link: &str) -> String {
    percent_decode_str(link)
        .decode_utf8()
        .map_or_else(|_| link.to_string(), Cow::into_owned)
}
