//! Illustrative JSON API calls against the public dog.ceo service.
//!
//! Two GET requests are issued and their parsed bodies written into an
//! [`ApiLog`] transcript, followed by a fixed table of common and
//! scientific animal names. A failed request is logged and noted in the
//! transcript; it never aborts the demonstration.

use std::{fmt, time::Duration};

use serde_json::Value;

use crate::error::DuplexError;

/// Breed list endpoint.
pub const BREED_LIST_URL: &str = "https://dog.ceo/api/breeds/list/all";
/// Random image endpoint.
pub const RANDOM_IMAGE_URL: &str = "https://dog.ceo/api/breeds/image/random";
/// Whole-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Breeds listed by name in the transcript.
pub const BREED_PREVIEW: usize = 15;

const RULE_WIDTH: usize = 60;

/// Common name → scientific name.
pub const ANIMALS: [(&str, &str); 30] = [
    ("dog", "Canis lupus familiaris"),
    ("cat", "Felis catus"),
    ("horse", "Equus caballus"),
    ("cow", "Bos taurus"),
    ("pig", "Sus scrofa"),
    ("chicken", "Gallus gallus"),
    ("mouse", "Mus musculus"),
    ("rat", "Rattus norvegicus"),
    ("rabbit", "Oryctolagus cuniculus"),
    ("sheep", "Ovis aries"),
    ("goat", "Capra hircus"),
    ("elephant", "Loxodonta africana"),
    ("lion", "Panthera leo"),
    ("tiger", "Panthera tigris"),
    ("bear", "Ursus arctos"),
    ("wolf", "Canis lupus"),
    ("dolphin", "Tursiops truncatus"),
    ("whale", "Balaenoptera musculus"),
    ("eagle", "Aquila chrysaetos"),
    ("frog", "Xenopus laevis"),
    ("human", "Homo sapiens"),
    ("chimpanzee", "Pan troglodytes"),
    ("gorilla", "Gorilla gorilla"),
    ("zebra", "Equus quagga"),
    ("panda", "Ailuropoda melanoleuca"),
    ("penguin", "Aptenodytes forsteri"),
    ("snake", "Python bivittatus"),
    ("turtle", "Chelonia mydas"),
    ("salmon", "Salmo salar"),
    ("shark", "Carcharodon carcharias"),
];

/// GET `url` and parse the body as JSON.
///
/// # Errors
///
/// [`DuplexError::HttpStatus`] for a non-success status,
/// [`DuplexError::Http`] for transport failures, [`DuplexError::Json`] for
/// a body that is not JSON.
pub fn fetch_json(url: &str) -> Result<Value, DuplexError> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .build()
        .into();

    log::debug!("GET {url}");
    let response = agent.get(url).call().map_err(|e| match e {
        ureq::Error::StatusCode(code) => DuplexError::HttpStatus(code),
        other => DuplexError::Http(other.to_string()),
    })?;
    let status = response.status().as_u16();
    if status != 200 {
        return Err(DuplexError::HttpStatus(status));
    }
    let body = response
        .into_body()
        .read_to_string()
        .map_err(|e| DuplexError::Http(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

/// The interesting parts of a breed-list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedSummary {
    /// The `status` field, if present and a string.
    pub status: Option<String>,
    /// Number of breeds (keys of `message`).
    pub total: usize,
    /// The first [`BREED_PREVIEW`] breed names, in response order.
    pub first: Vec<String>,
}

impl BreedSummary {
    /// Summarize a breed-list body. Missing fields count as empty.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let breeds = value.get("message").and_then(Value::as_object);
        Self {
            status: value
                .get("status")
                .and_then(Value::as_str)
                .map(str::to_owned),
            total: breeds.map_or(0, serde_json::Map::len),
            first: breeds
                .map(|m| m.keys().take(BREED_PREVIEW).cloned().collect())
                .unwrap_or_default(),
        }
    }
}

/// Transcript of one demonstration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiLog {
    text: String,
}

impl Default for ApiLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiLog {
    /// Start a transcript with its header.
    #[must_use]
    pub fn new() -> Self {
        let mut log = Self {
            text: String::new(),
        };
        log.line("Demonstrating JSON API calls");
        log.line(&"=".repeat(RULE_WIDTH));
        log.line("");
        log
    }

    fn line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    /// Announce request number `n` to `url`.
    pub fn request(&mut self, n: usize, url: &str) {
        if n > 1 {
            self.line("");
        }
        self.line(&format!("[{n}] Endpoint: {url}"));
        self.line("Sending GET request…");
        self.line("");
    }

    /// Record a breed-list response.
    pub fn breeds(&mut self, summary: &BreedSummary) {
        self.line("✓ Response received (JSON parsed):");
        self.line(&format!(
            "   Status field : {}",
            summary.status.as_deref().unwrap_or("-")
        ));
        self.line(&format!("   Total breeds : {}", summary.total));
        self.line(&format!("   First {BREED_PREVIEW}     : {}", summary.first.join(", ")));
    }

    /// Record a response as pretty-printed JSON.
    pub fn json(&mut self, value: &Value) {
        self.line("✓ Response received (JSON parsed):");
        let pretty =
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        self.line(&pretty);
    }

    /// Record a failed request.
    pub fn failure(&mut self, url: &str, error: &DuplexError) {
        log::warn!("request to {url} failed: {error}");
        self.line(&format!("✗ Request failed ({error}) - check your internet connection."));
    }

    /// Append the animal name table.
    pub fn animals(&mut self) {
        self.line("");
        self.line("");
        self.line(&"-".repeat(RULE_WIDTH));
        self.line("AVAILABLE ANIMALS IN DATABASE:");
        self.line(&"-".repeat(RULE_WIDTH));
        for (common, scientific) in ANIMALS {
            self.line(&format!("  {common:15} → {scientific}"));
        }
    }

    /// The transcript so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ApiLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Run the demonstration with the given fetcher.
pub fn run_with<F>(mut fetch: F) -> ApiLog
where
    F: FnMut(&str) -> Result<Value, DuplexError>,
{
    let mut log = ApiLog::new();

    log.request(1, BREED_LIST_URL);
    match fetch(BREED_LIST_URL) {
        Ok(body) => log.breeds(&BreedSummary::from_json(&body)),
        Err(e) => log.failure(BREED_LIST_URL, &e),
    }

    log.request(2, RANDOM_IMAGE_URL);
    match fetch(RANDOM_IMAGE_URL) {
        Ok(body) => log.json(&body),
        Err(e) => log.failure(RANDOM_IMAGE_URL, &e),
    }

    log.animals();
    log
}

/// Run the demonstration against the live service.
#[must_use]
pub fn run() -> ApiLog {
    run_with(fetch_json)
}
