//! The puzzle provider boundary.
//!
//! A [`PuzzleProvider`] hands out a freshly generated grid for a requested
//! difficulty. Two implementations ship here:
//!
//! - [`LocalProvider`]: bundled sample puzzles, for offline use and tests.
//! - [`RemoteProvider`]: client for the sugoku HTTP API
//!   (`GET {base}/board?difficulty=easy`). The HTTP transport itself is
//!   injected through the [`Transport`] trait; this module only formats the
//!   request URL and decodes the response body, so transport policy (retries,
//!   timeouts, TLS) stays with the caller.

use crate::errors::ProviderError;
use crate::grid::Grid;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Difficulty levels understood by the sugoku API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Let the provider pick any difficulty.
    Random,
}

impl Difficulty {
    /// All difficulty levels.
    pub fn all_levels() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Random,
        ]
    }

    /// The lowercase value used in the provider query string.
    pub fn as_query(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Random => "random",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Random => write!(f, "Random"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "random" => Ok(Difficulty::Random),
            _ => Err(format!(
                "unknown difficulty {:?}, expected easy, medium, hard or random",
                s
            )),
        }
    }
}

/// Source of fresh puzzles.
pub trait PuzzleProvider {
    /// Fetch a well-formed 9x9 grid of the requested difficulty.
    fn fetch_puzzle(&self, difficulty: Difficulty) -> Result<Grid, ProviderError>;
}

// ==================== Local provider ====================

/// Sample puzzles bundled with the crate, a few per difficulty.
const EASY_PUZZLES: &[&str] = &[
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
    "000260701680070090190004500820100040004602900050003028009300074040050036703018000",
];

const MEDIUM_PUZZLES: &[&str] = &[
    "020000600008020050500060020060000093003905100790000080050090004010070300006000010",
    "100920000524010000000000070050008102000000000402700090060000000000030945000071006",
];

const HARD_PUZZLES: &[&str] = &[
    "800000000003600000070090200050007000000045700000100030001000068008500010090000400",
    "000000010400000000020000000000050407008000300001090000300400200050100000000806000",
];

const ALL_PUZZLES: &[&str] = &[
    EASY_PUZZLES[0],
    EASY_PUZZLES[1],
    MEDIUM_PUZZLES[0],
    MEDIUM_PUZZLES[1],
    HARD_PUZZLES[0],
    HARD_PUZZLES[1],
];

/// Offline provider serving a random bundled sample of the requested
/// difficulty.
pub struct LocalProvider;

impl LocalProvider {
    /// Create a local provider.
    pub fn new() -> Self {
        Self
    }

    fn pool(difficulty: Difficulty) -> &'static [&'static str] {
        match difficulty {
            Difficulty::Easy => EASY_PUZZLES,
            Difficulty::Medium => MEDIUM_PUZZLES,
            Difficulty::Hard => HARD_PUZZLES,
            Difficulty::Random => ALL_PUZZLES,
        }
    }
}

impl Default for LocalProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleProvider for LocalProvider {
    fn fetch_puzzle(&self, difficulty: Difficulty) -> Result<Grid, ProviderError> {
        let pool = Self::pool(difficulty);
        let puzzle = pool
            .choose(&mut rand::thread_rng())
            .expect("sample pools are non-empty");
        Ok(Grid::from_string(puzzle)?)
    }
}

// ==================== Remote provider ====================

/// Response body of the sugoku `GET /board` endpoint.
#[derive(Debug, Deserialize)]
struct BoardResponse {
    board: Vec<Vec<u8>>,
}

/// Minimal HTTP GET seam for [`RemoteProvider`].
///
/// Implementations own everything about the transport: client construction,
/// timeouts, retries. Map connection failures to
/// [`ProviderError::Network`] and non-success statuses to
/// [`ProviderError::Server`].
pub trait Transport: Send + Sync {
    /// Perform a GET request and return the response body.
    fn get(&self, url: &str) -> Result<String, ProviderError>;
}

/// Client for a sugoku-style puzzle API.
pub struct RemoteProvider {
    base_url: String,
    transport: Box<dyn Transport>,
}

/// Default base URL of the public sugoku API.
pub const DEFAULT_BASE_URL: &str = "https://sugoku.herokuapp.com";

impl RemoteProvider {
    /// Create a provider talking to `base_url` over `transport`.
    pub fn new(base_url: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Create a provider using the `SUGOKU_API_URL` environment variable as
    /// base URL, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env(transport: Box<dyn Transport>) -> Self {
        let base_url =
            std::env::var("SUGOKU_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, transport)
    }

    fn board_url(&self, difficulty: Difficulty) -> String {
        format!(
            "{}/board?difficulty={}",
            self.base_url,
            difficulty.as_query()
        )
    }
}

impl PuzzleProvider for RemoteProvider {
    fn fetch_puzzle(&self, difficulty: Difficulty) -> Result<Grid, ProviderError> {
        let body = self.transport.get(&self.board_url(difficulty))?;
        let response: BoardResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        Ok(Grid::from_rows(&response.board)?)
    }
}
