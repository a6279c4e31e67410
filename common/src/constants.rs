pub const PYTHON: &str = "python";
pub const SERVER_MODULE: &str = "llama_cpp.server";

/// Extension of the model files we care about, compared case-insensitively.
pub const MODEL_SUFFIX: &str = "gguf";

/// Where the tools look for models, relative to the working directory.
pub const MODELS_DIR: &str = "models";

pub const SERVER_HOST: &str = "0.0.0.0";
pub const SERVER_PORT: u16 = 8080;
pub const SERVER_CTX: u32 = 4096;

/// 0 keeps everything on the CPU. -1 offloads every layer to the GPU.
pub const SERVER_GPU_LAYERS: i32 = 0;
