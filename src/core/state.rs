//! Core State trait for state machine snapshots.
//!
//! Every snapshot driven by the machine implements this trait, which
//! exposes pure inspection methods used by guards and history.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine snapshots.
///
/// All methods are pure. A snapshot is an immutable value; transitions
/// build a new one instead of mutating the old.
///
/// # Required Traits
///
/// - `Clone`: snapshots are copied into history records
/// - `PartialEq`: identity transitions are detected by value comparison
/// - `Debug`: snapshots must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: snapshots are handed to display layers as JSON
///
/// # Example
///
/// ```rust
/// use teller::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Shut,
///     Broken,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Shut => "Shut",
///             Self::Broken => "Broken",
///         }
///     }
/// }
///
/// assert_eq!(Door::Broken.name(), "Broken");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the lifecycle phase this snapshot is in.
    fn name(&self) -> &str;
}
