//! CLI argument parsing with clap.

use clap::Parser;

/// Curated prompts shown by `--examples`, one per line.
pub const EXAMPLE_PROMPTS: [&str; 6] = [
    "Futuristic cyberpunk cityscape at dusk",
    "A magical forest with glowing mushrooms",
    "A post-apocalyptic wasteland with a lone wanderer",
    "A spaceship landing on an alien planet",
    "A surreal desert with floating islands",
    "A cozy cabin in the woods during winter",
];

/// Text-to-image CLI that sends one prompt to three Hugging Face endpoints.
#[derive(Parser, Debug)]
#[command(name = "triptych", version, about)]
pub struct Cli {
    /// Text prompt describing the desired image.
    #[arg(conflicts_with = "prompt_file")]
    pub prompt: Option<String>,

    /// Path to a file containing the prompt text.
    #[arg(short = 'p', long, conflicts_with = "prompt")]
    pub prompt_file: Option<String>,

    /// List example prompts and exit.
    #[arg(long)]
    pub examples: bool,

    /// Output format: jpeg, png, webp. Defaults to whatever encoding the
    /// service returned.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Directory to write generated images into.
    #[arg(short, long, default_value = ".")]
    pub out_dir: String,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the prompt from either the positional argument or the file flag.
    ///
    /// # Errors
    ///
    /// Returns an error if neither prompt nor prompt-file is provided,
    /// or if the file cannot be read.
    pub fn resolve_prompt(&self) -> Result<String, std::io::Error> {
        if let Some(ref text) = self.prompt {
            Ok(text.clone())
        } else if let Some(ref path) = self.prompt_file {
            std::fs::read_to_string(path)
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Provide a prompt string or use -p/--prompt-file",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_prompt() {
        let cli = Cli::parse_from(["triptych", "a cat"]);
        assert_eq!(cli.prompt.as_deref(), Some("a cat"));
        assert!(cli.prompt_file.is_none());
        assert_eq!(cli.resolve_prompt().unwrap(), "a cat");
    }

    #[test]
    fn prompt_file_flag() {
        let dir = std::env::temp_dir().join("triptych_cli_pf_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prompt.txt");
        std::fs::write(&path, "prompt from file").unwrap();

        let cli = Cli::parse_from(["triptych", "-p", path.to_str().unwrap()]);
        assert!(cli.prompt.is_none());
        assert!(cli.prompt_file.is_some());
        assert_eq!(cli.resolve_prompt().unwrap(), "prompt from file");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn default_values() {
        let cli = Cli::parse_from(["triptych", "a cat"]);
        assert!(cli.format.is_none());
        assert_eq!(cli.out_dir, ".");
        assert!(cli.config.is_none());
        assert!(!cli.examples);
        assert!(!cli.verbose);
    }

    #[test]
    fn examples_flag_needs_no_prompt() {
        let cli = Cli::parse_from(["triptych", "--examples"]);
        assert!(cli.examples);
        assert!(cli.prompt.is_none());
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "triptych",
            "-f",
            "png",
            "-o",
            "/tmp/generated",
            "--config",
            "custom.toml",
            "-v",
            "a landscape",
        ]);
        assert_eq!(cli.format.as_deref(), Some("png"));
        assert_eq!(cli.out_dir, "/tmp/generated");
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert!(cli.verbose);
        assert_eq!(cli.prompt.as_deref(), Some("a landscape"));
    }

    #[test]
    fn no_prompt_errors() {
        let cli = Cli::parse_from(["triptych"]);
        assert!(cli.resolve_prompt().is_err());
    }
}
