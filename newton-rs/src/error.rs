use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Image(image::ImageError),
    EmptyPalette,
    InvalidTolerance(f64),
    EmptyResolution { nx: u32, ny: u32 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "I/O error: {}", e),
            RenderError::Json(e) => write!(f, "Invalid fractal descriptor: {}", e),
            RenderError::Image(e) => write!(f, "Image error: {}", e),
            RenderError::EmptyPalette => write!(f, "Palette must contain at least one color"),
            RenderError::InvalidTolerance(tolerance) => write!(
                f,
                "Iteration tolerance must be a positive number, got {}",
                tolerance
            ),
            RenderError::EmptyResolution { nx, ny } => {
                write!(f, "Resolution {}x{} has no pixels", nx, ny)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            RenderError::Json(e) => Some(e),
            RenderError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::Json(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Image(e)
    }
}
