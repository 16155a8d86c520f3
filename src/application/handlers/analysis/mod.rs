//! Analysis handlers - the text analysis pipeline.

mod analyze_text;

pub use analyze_text::{
    AnalysisSource, AnalyzeTextCommand, AnalyzeTextError, AnalyzeTextHandler, AnalyzeTextResult,
};
