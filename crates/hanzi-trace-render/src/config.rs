use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[cfg(any(feature = "backend-fontdue", feature = "backend-mock"))]
use std::sync::Arc;

use hanzi_trace_types::{RenderError, RenderResult};

use crate::renderer::DynGlyphRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Fontdue,
    Mock,
}

impl FromStr for Backend {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fontdue" => Ok(Backend::Fontdue),
            "mock" => Ok(Backend::Mock),
            other => Err(RenderError::configuration(format!(
                "unknown backend '{other}'"
            ))),
        }
    }
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Fontdue => "fontdue",
            Backend::Mock => "mock",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn compiled_backends() -> Vec<Backend> {
    let mut backends = Vec::new();
    #[cfg(feature = "backend-fontdue")]
    {
        backends.push(Backend::Fontdue);
    }
    #[cfg(feature = "backend-mock")]
    {
        backends.push(Backend::Mock);
    }
    backends
}

fn default_backend() -> Backend {
    if cfg!(feature = "backend-fontdue") {
        Backend::Fontdue
    } else {
        Backend::Mock
    }
}

/// Backend selection plus the inputs backends need to construct themselves.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub backend: Backend,
    /// Font file for backends that rasterize real glyphs.
    pub font: Option<PathBuf>,
}

impl Default for Configuration {
    fn default() -> Self {
        let backend = compiled_backends()
            .into_iter()
            .next()
            .unwrap_or_else(default_backend);
        Self {
            backend,
            font: None,
        }
    }
}

impl Configuration {
    pub fn from_env() -> RenderResult<Self> {
        let mut config = Configuration::default();
        if let Ok(backend) = env::var("HANZI_TRACE_BACKEND") {
            config.backend = Backend::from_str(&backend)?;
        }
        if let Ok(path) = env::var("HANZI_TRACE_FONT") {
            config.font = Some(PathBuf::from(path));
        }
        Ok(config)
    }

    pub fn available_backends() -> Vec<Backend> {
        compiled_backends()
    }

    pub fn create_renderer(&self) -> RenderResult<DynGlyphRenderer> {
        match self.backend {
            Backend::Fontdue => self.create_fontdue(),
            Backend::Mock => self.create_mock(),
        }
    }

    #[cfg(feature = "backend-fontdue")]
    fn create_fontdue(&self) -> RenderResult<DynGlyphRenderer> {
        let font = self.font.as_ref().ok_or_else(|| {
            RenderError::configuration(
                "fontdue backend requires a font file; pass --font or set HANZI_TRACE_FONT",
            )
        })?;
        Ok(Arc::new(crate::backends::FontdueRenderer::from_path(font)?))
    }

    #[cfg(not(feature = "backend-fontdue"))]
    fn create_fontdue(&self) -> RenderResult<DynGlyphRenderer> {
        Err(RenderError::unsupported(Backend::Fontdue.as_str()))
    }

    #[cfg(feature = "backend-mock")]
    fn create_mock(&self) -> RenderResult<DynGlyphRenderer> {
        Ok(Arc::new(crate::backends::MockRenderer))
    }

    #[cfg(not(feature = "backend-mock"))]
    fn create_mock(&self) -> RenderResult<DynGlyphRenderer> {
        Err(RenderError::unsupported(Backend::Mock.as_str()))
    }
}
