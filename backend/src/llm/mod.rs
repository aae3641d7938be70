//! External LLM collaborator
//!
//! FitTrack treats the language model as a text-in/text-out collaborator:
//! callers assemble the prompt, this module delivers it and returns the
//! model's free-form reply. Parsing replies into plan fields happens on the
//! caller's side.

mod gemini;

pub use gemini::GeminiClient;
