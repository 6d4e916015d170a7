use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Contour extraction requires a single-channel raster.
    ChannelCount { actual: usize },
    /// Scan strides must be at least 1 in both axes.
    InvalidStep { step_x: usize, step_y: usize },
    /// A geometric query was asked of a contour with no points.
    EmptyContour,
    /// Least-squares fit is undefined when all points share one x.
    DegenerateFit,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelCount { actual } => {
                write!(f, "contours require a single-channel raster, got {actual}")
            }
            Self::InvalidStep { step_x, step_y } => {
                write!(f, "tracing steps must be at least 1, got {step_x}x{step_y}")
            }
            Self::EmptyContour => write!(f, "contour has no points"),
            Self::DegenerateFit => write!(f, "line fit is degenerate (vertical)"),
        }
    }
}

impl std::error::Error for Error {}
