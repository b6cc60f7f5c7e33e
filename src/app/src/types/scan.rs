use crate::config::MAX_SCAN_ATTEMPTS;
use crate::types::Network;

/// Interpreted answer of the scan-status endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStatus {
    /// 202: the device is still scanning
    InProgress,
    /// 200: scan finished, possibly without results
    Completed(Vec<Network>),
    /// 500: the device reported an error
    Failed(String),
    /// Any other status code
    Unexpected(u16),
}

/// Content of the network list area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NetworkList {
    #[default]
    Idle,
    Scanning,
    Networks(Vec<Network>),
    NoNetworksFound,
    ScanFailed,
}

/// Scan loop state
///
/// `generation` identifies the current run of the loop. Ticks and responses carry the
/// generation they were issued for and are dropped once it no longer matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    is_scanning: bool,
    attempts: u32,
    generation: u64,
    list: NetworkList,
}

impl ScanState {
    pub fn is_scanning(&self) -> bool {
        self.is_scanning
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn list(&self) -> &NetworkList {
        &self.list
    }

    /// Enter a fresh run of the loop
    ///
    /// Returns the generation of the new run, or `None` when a run is already active.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_scanning {
            return None;
        }
        self.is_scanning = true;
        self.attempts = 0;
        self.generation += 1;
        Some(self.generation)
    }

    /// Whether a tick or response issued for `generation` still belongs to the active run
    pub fn is_current(&self, generation: u64) -> bool {
        self.is_scanning && self.generation == generation
    }

    pub fn show_scanning(&mut self) {
        self.list = NetworkList::Scanning;
    }

    /// Count an empty result; returns `true` once the retry budget is used up
    pub fn record_empty_result(&mut self) -> bool {
        self.attempts += 1;
        if self.attempts >= MAX_SCAN_ATTEMPTS {
            self.is_scanning = false;
            self.list = NetworkList::NoNetworksFound;
            true
        } else {
            false
        }
    }

    /// Terminal success: show the networks and reset the retry counter
    pub fn complete(&mut self, networks: Vec<Network>) {
        self.is_scanning = false;
        self.attempts = 0;
        self.list = NetworkList::Networks(networks);
    }

    /// Terminal failure
    pub fn fail(&mut self) {
        self.is_scanning = false;
        self.list = NetworkList::ScanFailed;
    }

    /// Stop the active run; returns `false` when nothing was running
    pub fn cancel(&mut self) -> bool {
        if !self.is_scanning {
            return false;
        }
        self.is_scanning = false;
        self.generation += 1;
        if self.list == NetworkList::Scanning {
            self.list = NetworkList::Idle;
        }
        true
    }
}
