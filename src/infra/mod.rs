pub mod gemini;
pub mod git;
pub mod github;
pub mod process;
