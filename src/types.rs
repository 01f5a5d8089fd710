//! Core types shared across the panel.

/// Largest cyclic traversal length an 8-bit position can address.
pub const MAX_TRAVERSAL: usize = u8::MAX as usize;

/// Panel construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// No key colors provided.
    NoKeyColors,

    /// A fixed-capacity store is too small for the configuration.
    CapacityExceeded {
        /// Number of entries the configuration needs.
        required: usize,
        /// Number of entries the store can hold.
        capacity: usize,
    },

    /// The mirrored traversal does not fit in an 8-bit position.
    TooManyColors {
        /// Traversal length the configuration would produce.
        required: usize,
    },
}

impl core::fmt::Display for PanelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PanelError::NoKeyColors => {
                write!(f, "panel must have at least one key color")
            }
            PanelError::CapacityExceeded { required, capacity } => {
                write!(
                    f,
                    "capacity exceeded: {} entries required, {} available",
                    required, capacity
                )
            }
            PanelError::TooManyColors { required } => {
                write!(
                    f,
                    "mirrored traversal of {} colors exceeds the limit of {}",
                    required, MAX_TRAVERSAL
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PanelError {}
