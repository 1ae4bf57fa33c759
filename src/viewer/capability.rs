use std::fmt;

/// Whether the 3-D viewer can run on this host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// A rendering adapter was found.
    Available {
        /// Adapter name as reported by the driver.
        adapter: String,
    },
    /// No usable rendering backend.
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
}

impl Availability {
    /// Whether the viewer may be offered.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available { adapter } => write!(f, "available ({adapter})"),
            Self::Unavailable { reason } => write!(f, "unavailable: {reason}"),
        }
    }
}

/// Check once, at startup, whether a rendering backend is present.
///
/// Without the `viewer` feature this always reports
/// [`Availability::Unavailable`].
#[must_use]
pub fn probe() -> Availability {
    #[cfg(feature = "viewer")]
    {
        match pollster::block_on(crate::gpu::render_context::probe_adapter()) {
            Ok(adapter) => {
                log::debug!("rendering adapter: {adapter}");
                Availability::Available { adapter }
            }
            Err(e) => Availability::Unavailable {
                reason: e.to_string(),
            },
        }
    }
    #[cfg(not(feature = "viewer"))]
    {
        Availability::Unavailable {
            reason: "built without the `viewer` feature".into(),
        }
    }
}
