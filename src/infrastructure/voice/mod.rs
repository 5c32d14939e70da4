//! Realtime voice provider clients

pub mod openai;

pub use openai::OpenAiRealtimeClient;
