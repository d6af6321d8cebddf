//! Image generation client for the Hugging Face inference API.

use image::{DynamicImage, ImageFormat};
use serde::Serialize;

use crate::endpoint::Endpoint;
use crate::error::GenerateError;
use crate::transport::RetryTransport;

/// JSON request body shared by all three endpoints.
///
/// Built fresh for every call and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    /// Prompt text describing the desired image.
    pub inputs: String,
    /// Optional reference image for image-to-image models. Omitted from
    /// the wire format when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
}

impl GenerationRequest {
    /// Build a text-only request from a prompt.
    #[must_use]
    pub fn new(prompt: &str) -> Self {
        Self { inputs: prompt.to_string(), image: None }
    }
}

/// A successfully generated and decoded image.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// Raw encoded bytes exactly as returned by the service.
    pub data: Vec<u8>,
    /// Encoding detected from the response bytes.
    pub format: ImageFormat,
    /// Decoded raster image.
    pub image: DynamicImage,
}

/// Result of fanning one prompt out to all three endpoints.
#[derive(Debug)]
pub struct Triptych {
    /// Image from the general endpoint, if it produced one.
    pub general: Option<GeneratedImage>,
    /// Image from the president variant, if it produced one.
    pub president: Option<GeneratedImage>,
    /// Image from the stable-diffusion variant, if it produced one.
    pub stable_diffusion: Option<GeneratedImage>,
}

impl Triptych {
    /// The image produced by the given endpoint, if any.
    #[must_use]
    pub fn get(&self, endpoint: Endpoint) -> Option<&GeneratedImage> {
        match endpoint {
            Endpoint::General => self.general.as_ref(),
            Endpoint::President => self.president.as_ref(),
            Endpoint::StableDiffusion => self.stable_diffusion.as_ref(),
        }
    }

    /// Number of endpoints that produced an image.
    #[must_use]
    pub fn present_count(&self) -> usize {
        Endpoint::ALL.into_iter().filter(|e| self.get(*e).is_some()).count()
    }

    /// True when no endpoint produced an image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.present_count() == 0
    }
}

/// Client for the three fixed generation endpoints.
///
/// One shared [`RetryTransport`] serves all endpoints. Every call is
/// independent; no state is carried between invocations.
pub struct HuggingFaceGenerator {
    transport: RetryTransport,
    base_url: String,
    token: String,
}

impl HuggingFaceGenerator {
    /// Create a generator with the given bearer token and API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(token: String, base_url: &str) -> Result<Self, GenerateError> {
        Ok(Self {
            transport: RetryTransport::new()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Generate one image from the given endpoint.
    ///
    /// The prompt is forwarded as-is; empty prompts are accepted and the
    /// service decides what to make of them.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Network`] when no HTTP response was
    /// obtained, [`GenerateError::Api`] when the final response carried a
    /// non-2xx status, and [`GenerateError::Decode`] when a successful
    /// response body was not a valid image encoding.
    pub async fn generate(
        &self,
        endpoint: Endpoint,
        prompt: &str,
    ) -> Result<GeneratedImage, GenerateError> {
        let body = GenerationRequest::new(prompt);
        let request = self
            .transport
            .post(&format!("{}/{}", self.base_url, endpoint.path()))
            .bearer_auth(&self.token)
            .json(&body)
            .build()?;

        let reply = self.transport.execute(request).await;

        if let Some(reason) = reply.network_error {
            return Err(GenerateError::Network(reason));
        }
        if !reply.status.is_success() {
            return Err(GenerateError::Api {
                status: reply.status.as_u16(),
                message: String::from_utf8_lossy(&reply.body).into_owned(),
            });
        }

        decode_image(reply.body)
    }

    /// Fan one prompt out to all three endpoints and join the results.
    ///
    /// The join never short-circuits: each endpoint runs all its attempts
    /// regardless of the others, and each failure is logged and collapsed
    /// to an absence. Nothing fails out of this method.
    pub async fn generate_all(&self, prompt: &str) -> Triptych {
        let (general, president, stable_diffusion) = tokio::join!(
            self.generate(Endpoint::General, prompt),
            self.generate(Endpoint::President, prompt),
            self.generate(Endpoint::StableDiffusion, prompt),
        );

        Triptych {
            general: settle(Endpoint::General, general),
            president: settle(Endpoint::President, president),
            stable_diffusion: settle(Endpoint::StableDiffusion, stable_diffusion),
        }
    }
}

/// Collapse one endpoint's outcome to presence or absence, logging the
/// failure reason.
fn settle(
    endpoint: Endpoint,
    result: Result<GeneratedImage, GenerateError>,
) -> Option<GeneratedImage> {
    match result {
        Ok(image) => Some(image),
        Err(err) => {
            tracing::warn!("No image from {}: {}", endpoint.label(), err);
            None
        }
    }
}

/// Decode response bytes into a raster image, detecting the encoding.
fn decode_image(data: Vec<u8>) -> Result<GeneratedImage, GenerateError> {
    let format = image::guess_format(&data)
        .map_err(|e| GenerateError::Decode(format!("Unrecognized image data: {e}")))?;
    let image = image::load_from_memory(&data)
        .map_err(|e| GenerateError::Decode(format!("Failed to decode image: {e}")))?;
    Ok(GeneratedImage { data, format, image })
}
