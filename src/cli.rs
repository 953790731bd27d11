//! Command Session
//!
//! Line commands driving one cache and one dataset, as read by the binary.
//!
//! ```text
//! put <key> <value...>     store a value
//! get <key>                read a value
//! keys                     keys in eviction order
//! page [page] [size]       offset page as JSON
//! hyper [page] [size]      offset page with navigation links
//! index [index] [size]     deletion-tolerant page
//! delete <index>           drop a dataset row
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::cache::BoundedCache;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::pagination::{CsvFile, DatasetSource, IndexedPaginator, DEFAULT_PAGE};

/// Printed for a cache miss
pub const MISS: &str = "(nil)";

// == Command ==
/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put { key: String, value: String },
    Get { key: String },
    Keys,
    Page { page: usize, page_size: Option<usize> },
    Hyper { page: usize, page_size: Option<usize> },
    Index { index: usize, page_size: Option<usize> },
    Delete { index: usize },
}

impl Command {
    /// Parses a line; blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let command = match verb.as_str() {
            "put" => {
                let key = required(words.next(), "put needs a key")?;
                let value = words.by_ref().collect::<Vec<_>>().join(" ");
                if value.is_empty() {
                    return Err(Error::InvalidCommand("put needs a value".to_string()));
                }
                Command::Put {
                    key: key.to_string(),
                    value,
                }
            }
            "get" => Command::Get {
                key: required(words.next(), "get needs a key")?.to_string(),
            },
            "keys" => Command::Keys,
            "page" => Command::Page {
                page: number(words.next())?.unwrap_or(DEFAULT_PAGE),
                page_size: number(words.next())?,
            },
            "hyper" => Command::Hyper {
                page: number(words.next())?.unwrap_or(DEFAULT_PAGE),
                page_size: number(words.next())?,
            },
            "index" => Command::Index {
                index: number(words.next())?.unwrap_or(0),
                page_size: number(words.next())?,
            },
            "delete" => Command::Delete {
                index: number(words.next())?
                    .ok_or_else(|| Error::InvalidCommand("delete needs an index".to_string()))?,
            },
            other => {
                return Err(Error::InvalidCommand(format!("unknown command '{}'", other)));
            }
        };

        if let Some(extra) = words.next() {
            return Err(Error::InvalidCommand(format!("unexpected argument '{}'", extra)));
        }
        Ok(Some(command))
    }
}

fn required<'a>(word: Option<&'a str>, message: &str) -> Result<&'a str> {
    word.ok_or_else(|| Error::InvalidCommand(message.to_string()))
}

fn number(word: Option<&str>) -> Result<Option<usize>> {
    word.map(|raw| {
        raw.parse()
            .map_err(|_| Error::InvalidCommand(format!("'{}' is not a number", raw)))
    })
    .transpose()
}

// == Session ==
/// A cache plus a dataset, driven one command at a time.
///
/// Discards reach the session through the cache's listener and are reported
/// as `DISCARD: <key>` lines in the output of the `put` that caused them.
pub struct Session<S> {
    cache: BoundedCache<String, String>,
    pages: IndexedPaginator<S>,
    page_size: usize,
    discarded: Rc<RefCell<Vec<String>>>,
}

impl Session<CsvFile> {
    /// Session over the configured CSV file.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config, CsvFile::new(&config.data_file))
    }
}

impl<S: DatasetSource> Session<S> {
    pub fn new(config: &Config, source: S) -> Result<Self> {
        config.validate()?;

        let discarded = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&discarded);
        let cache: BoundedCache<String, String> =
            BoundedCache::from_kind(config.policy, config.capacity)?.with_listener(
                move |key: &String| {
                    info!("DISCARD: {}", key);
                    sink.borrow_mut().push(key.clone());
                },
            );

        Ok(Self {
            cache,
            pages: IndexedPaginator::new(source),
            page_size: config.page_size,
            discarded,
        })
    }

    pub fn cache(&self) -> &BoundedCache<String, String> {
        &self.cache
    }

    // == Handle Line ==
    /// Parses and executes one line, returning the output lines.
    pub fn handle_line(&mut self, line: &str) -> Result<Vec<String>> {
        match Command::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(Vec::new()),
        }
    }

    // == Execute ==
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>> {
        let output: Vec<String> = match command {
            Command::Put { key, value } => {
                self.cache.put(key, value);
                self.discarded
                    .borrow_mut()
                    .drain(..)
                    .map(|key| format!("DISCARD: {}", key))
                    .collect()
            }
            Command::Get { key } => {
                let value = self.cache.get(key.as_str()).cloned();
                vec![value.unwrap_or_else(|| MISS.to_string())]
            }
            Command::Keys => {
                let keys: Vec<&str> = self.cache.keys().map(String::as_str).collect();
                vec![keys.join(" ")]
            }
            Command::Page { page, page_size } => {
                let rows = self
                    .pages
                    .paginator()
                    .get_page(page, page_size.unwrap_or(self.page_size))?;
                vec![serde_json::to_string(rows)?]
            }
            Command::Hyper { page, page_size } => {
                let hyper = self
                    .pages
                    .paginator()
                    .get_hyper(page, page_size.unwrap_or(self.page_size))?;
                vec![serde_json::to_string(&hyper)?]
            }
            Command::Index { index, page_size } => {
                let page = self
                    .pages
                    .get_hyper_index(index, page_size.unwrap_or(self.page_size))?;
                vec![serde_json::to_string(&page)?]
            }
            Command::Delete { index } => match self.pages.remove(index)? {
                Some(_) => vec![format!("deleted row {}", index)],
                None => vec![format!("no row at {}", index)],
            },
        };
        Ok(output)
    }
}
