use camino::Utf8Path;
use common::constants::MODELS_DIR;
use common::model_file::{self, ModelList};

fn main() {
    let models = match model_file::model_files(Utf8Path::new(MODELS_DIR)) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Failed to read {}: {}", MODELS_DIR, e);
            std::process::exit(1);
        }
    };

    print_models(model_lines(&models));
}

fn model_lines(models: &ModelList) -> Vec<String> {
    models
        .iter()
        .map(|m| format!("{}\t{}", m.name, m.size))
        .collect()
}

fn print_models(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use common::model_file::ModelFile;

    #[test]
    fn test_model_lines() {
        let models = vec![
            ModelFile {
                name: "orca-mini.gguf".to_string(),
                path: "models/orca-mini.gguf".into(),
                size: 31,
                mtime: 1730563919,
            },
            ModelFile {
                name: "tiny-llama.gguf".to_string(),
                path: "models/tiny-llama.gguf".into(),
                size: 38,
                mtime: 1730563920,
            },
        ];

        assert_eq!(
            vec![
                "orca-mini.gguf\t31".to_string(),
                "tiny-llama.gguf\t38".to_string()
            ],
            model_lines(&models)
        );

        assert!(model_lines(&ModelList::new()).is_empty());
    }
}
