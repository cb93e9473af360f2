use thiserror::Error;

/// Host misconfiguration detected by the interactor. Degenerate geometry
/// (a ray parallel to the drag plane) is not an error and never shows up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InteractError {
    #[error("no viewport bound; call set_viewport before feeding pointer events")]
    ViewportUnbound,
    #[error("viewport is degenerate ({width}x{height})")]
    DegenerateViewport { width: f32, height: f32 },
    #[error("camera produced no usable ray; check eye, target and projection")]
    DegenerateCamera,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown drag event kind `{0}`")]
pub struct UnknownEventKind(pub String);
