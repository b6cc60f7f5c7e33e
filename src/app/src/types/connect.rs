/// Label of the connect button while idle
pub const CONNECT_LABEL: &str = "Connect";

/// Label of the connect button while an attempt is running
pub const CONNECTING_LABEL: &str = "connecting...";

/// Interpreted answer of the credentials submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx: the agent stored the credentials and starts connecting
    Accepted(String),
    /// Any other status: the agent refused, body is the reason
    Rejected(String),
}

/// Interpreted answer of the connection-status endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// 202 with a progress message
    InProgress(String),
    /// 200 with a success message
    Connected(String),
    /// 500 with an error message
    Failed(String),
    /// Any other status code
    Unexpected(u16),
}

/// Open password prompt for a protected network
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordPrompt {
    ssid: String,
    password: String,
}

impl PasswordPrompt {
    pub fn new(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: String::new(),
        }
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

/// Connect flow state
///
/// `attempt` plays the role the generation plays for the scan loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectState {
    is_connecting: bool,
    attempt: u64,
    prompt: Option<PasswordPrompt>,
}

impl ConnectState {
    pub fn is_connecting(&self) -> bool {
        self.is_connecting
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn prompt(&self) -> Option<&PasswordPrompt> {
        self.prompt.as_ref()
    }

    /// Start an attempt; returns its id, or `None` while another one runs
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_connecting {
            return None;
        }
        self.is_connecting = true;
        self.attempt += 1;
        Some(self.attempt)
    }

    pub fn is_current(&self, attempt: u64) -> bool {
        self.is_connecting && self.attempt == attempt
    }

    /// End the running attempt and re-enable the connect button
    pub fn finish(&mut self) {
        self.is_connecting = false;
    }

    /// Stop the running attempt; returns `false` when nothing was running
    pub fn cancel(&mut self) -> bool {
        if !self.is_connecting {
            return false;
        }
        self.is_connecting = false;
        self.attempt += 1;
        true
    }

    /// Show the prompt for `ssid` with an empty field
    pub fn open_prompt(&mut self, ssid: impl Into<String>) {
        self.prompt = Some(PasswordPrompt::new(ssid));
    }

    pub fn close_prompt(&mut self) {
        self.prompt = None;
    }

    /// Update the password field; ignored when no prompt is open
    pub fn set_password(&mut self, password: String) -> bool {
        match &mut self.prompt {
            Some(prompt) => {
                prompt.password = password;
                true
            }
            None => false,
        }
    }
}
