pub mod assemblyai;
mod base;

// Re-export public types and traits
pub use base::{AudioPayload, FailureKind, STTError, TranscriptionProvider, UploadReference};

// Re-export AssemblyAI implementation
pub use assemblyai::{AssemblyAIClient, AssemblyAIConfig, AssemblyAIRegion};

/// Supported batch STT providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum STTProvider {
    /// AssemblyAI pre-recorded audio REST API
    #[default]
    AssemblyAI,
}

impl std::fmt::Display for STTProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            STTProvider::AssemblyAI => write!(f, "assemblyai"),
        }
    }
}

impl std::str::FromStr for STTProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "assemblyai" | "assembly-ai" | "assembly_ai" => Ok(STTProvider::AssemblyAI),
            _ => Err(format!(
                "Unsupported STT provider: {s}. Supported providers: assemblyai"
            )),
        }
    }
}
