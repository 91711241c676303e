pub mod client;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod notice;
pub mod ranker;
pub mod session;
pub mod types;

pub use client::{PartsApiClient, RemoteLookup, RemoteResults};
pub use error::{RemoteError, SearchError};
pub use matcher::{CatalogMatch, MatchStage, Matcher};
pub use normalize::normalize;
pub use notice::{escape_html, FallbackReason, Notice, NoticeKind, EMPTY_STATE_MESSAGE};
pub use ranker::{annotate_best_price, best_price, RankedEntry};
pub use session::{SearchOutcome, SearchSession};
