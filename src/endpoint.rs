//! The three fixed inference endpoints and their model paths.

/// Default host of the Hugging Face serverless inference API.
pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";

/// The three image generation endpoints a prompt fans out to.
///
/// All three share one request shape and one credential; they differ only
/// in the model behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// General-purpose FLUX text-to-image model.
    General,
    /// Portrait-tuned FLUX variant.
    President,
    /// Stable Diffusion XL variant.
    StableDiffusion,
}

impl Endpoint {
    /// All three endpoints, in fan-out order.
    pub const ALL: [Endpoint; 3] =
        [Endpoint::General, Endpoint::President, Endpoint::StableDiffusion];

    /// Model path under the API base, without a leading slash.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::General => "models/black-forest-labs/FLUX.1-dev",
            Endpoint::President => "models/strangerzonehf/Flux-Super-Portrait-LoRA",
            Endpoint::StableDiffusion => "models/stabilityai/stable-diffusion-xl-base-1.0",
        }
    }

    /// Short label used in log lines and generated file names.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::General => "flux",
            Endpoint::President => "president",
            Endpoint::StableDiffusion => "diffusion",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_variant() {
        assert_eq!(Endpoint::ALL.len(), 3);
        assert!(Endpoint::ALL.contains(&Endpoint::General));
        assert!(Endpoint::ALL.contains(&Endpoint::President));
        assert!(Endpoint::ALL.contains(&Endpoint::StableDiffusion));
    }

    #[test]
    fn paths_are_distinct() {
        assert_ne!(Endpoint::General.path(), Endpoint::President.path());
        assert_ne!(Endpoint::President.path(), Endpoint::StableDiffusion.path());
        assert_ne!(Endpoint::General.path(), Endpoint::StableDiffusion.path());
    }

    #[test]
    fn paths_join_cleanly_with_a_base_url() {
        for endpoint in Endpoint::ALL {
            assert!(endpoint.path().starts_with("models/"));
            assert!(!endpoint.path().starts_with('/'));
        }
    }

    #[test]
    fn labels_are_filename_safe() {
        for endpoint in Endpoint::ALL {
            assert!(endpoint.label().chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
