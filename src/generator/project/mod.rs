mod emit;
mod generate;

pub use emit::{write_artifacts, EmitMode};
pub use generate::{
    artifact_path, generate_artifacts, generate_project, ArtifactSpec, GenerateOptions,
    GenerationReport,
};
