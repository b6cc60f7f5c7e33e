use crate::types::{Banner, ConnectState, ScanState};

/// Application Model - the complete state
///
/// Flags are only changed through the transition methods of the sub-states.
/// The shell never sees this type; it gets a `ViewModel` instead.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Model {
    pub scan: ScanState,
    pub connect: ConnectState,
    pub banner: Banner,
}
