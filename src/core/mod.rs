pub mod relay;
pub mod stt;

// Re-export commonly used types for convenience
pub use relay::{RelayStage, TranscriptResult, TranscriptionRelay};
pub use stt::{
    AssemblyAIClient, AssemblyAIConfig, AudioPayload, STTError, STTProvider, TranscriptionProvider,
    UploadReference,
};
