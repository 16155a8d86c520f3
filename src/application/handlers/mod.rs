//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod records;

pub use analysis::{
    AnalysisSource, AnalyzeTextCommand, AnalyzeTextError, AnalyzeTextHandler, AnalyzeTextResult,
};
pub use records::{
    BurnRecordError, GetSessionHistoryHandler, GetSessionHistoryQuery, GetSessionStatsHandler,
    GetSessionStatsQuery, MarkPosterSavedCommand, MarkPosterSavedHandler, SaveBurnRecordCommand,
    SaveBurnRecordHandler,
};
